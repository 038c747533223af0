//! Survey response records and their numeric feature projection.
//!
//! Callers fetch response rows from their own store and hand them over as
//! plain [`SurveyResponse`] values; this module never issues queries. The
//! projection turns each response into the three features the clustering
//! engine runs on: sentiment score, scaled rating, and normalized text
//! length.

use crate::primitives::Matrix;
use crate::sentiment::SentimentAnalyzer;
use serde::{Deserialize, Serialize};

/// Rating scale midpoint and half-range for the [-1, 1] mapping (1..=5 stars).
const RATING_MIDPOINT: f32 = 3.0;
const RATING_HALF_RANGE: f32 = 2.0;

/// Character cap against which text length is normalized.
const LENGTH_CAP: f32 = 280.0;

/// One survey response as supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: String,
    pub text: String,
    /// Star rating on a 1-5 scale, when the respondent gave one.
    pub rating: Option<f32>,
    pub created_at: Option<String>,
}

impl SurveyResponse {
    /// Convenience constructor for a text-and-rating response.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, rating: Option<f32>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            rating,
            created_at: None,
        }
    }
}

/// Number of features produced per response.
pub const FEATURE_DIMENSIONS: usize = 3;

/// Projects responses into the clustering feature space.
///
/// Each row holds `[sentiment_score, scaled_rating, normalized_length]`:
/// the sentiment score is in [-1, 1], ratings map 1..=5 onto [-1, 1]
/// (missing rating -> 0.0), and text length is capped at 280 characters and
/// scaled to [0, 1].
///
/// # Examples
///
/// ```
/// use sentir::response::{feature_matrix, SurveyResponse, FEATURE_DIMENSIONS};
/// use sentir::sentiment::SentimentAnalyzer;
///
/// let analyzer = SentimentAnalyzer::new();
/// let responses = vec![
///     SurveyResponse::new("1", "ótimo produto", Some(5.0)),
///     SurveyResponse::new("2", "péssimo", Some(1.0)),
/// ];
/// let features = feature_matrix(&responses, &analyzer);
/// assert_eq!(features.shape(), (2, FEATURE_DIMENSIONS));
/// ```
#[must_use]
pub fn feature_matrix(
    responses: &[SurveyResponse],
    analyzer: &SentimentAnalyzer,
) -> Matrix<f32> {
    let mut data = Vec::with_capacity(responses.len() * FEATURE_DIMENSIONS);

    for response in responses {
        let sentiment = analyzer.analyze(&response.text);
        data.push(sentiment.score);

        let scaled_rating = response
            .rating
            .map(|r| ((r - RATING_MIDPOINT) / RATING_HALF_RANGE).clamp(-1.0, 1.0))
            .unwrap_or(0.0);
        data.push(scaled_rating);

        let length = response.text.chars().count() as f32;
        data.push((length / LENGTH_CAP).min(1.0));
    }

    Matrix::from_vec(responses.len(), FEATURE_DIMENSIONS, data)
        .expect("internal error: feature row construction mismatch")
}
