//! Thematic sentiment attribution.
//!
//! Detects which themes (service, product, price) a text concerns by
//! case-insensitive substring matching against per-theme keyword tables, then
//! scores each detected theme independently. Texts touching no named theme
//! fall back to a single `general` theme so every analysis carries at least
//! one result.
//!
//! # Examples
//!
//! ```
//! use sentir::thematic::{Theme, ThematicAnalyzer};
//!
//! let analyzer = ThematicAnalyzer::new();
//! let analysis = analyzer.analyze("atendimento excelente, mas muito caro");
//!
//! let themes: Vec<Theme> = analysis.results.iter().map(|r| r.theme).collect();
//! assert!(themes.contains(&Theme::Service));
//! assert!(themes.contains(&Theme::Price));
//! ```

use crate::lexicon;
use crate::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topical category to which sentiment is attributed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Service,
    Product,
    Price,
    General,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Service => "atendimento",
            Theme::Product => "produto",
            Theme::Price => "preço",
            Theme::General => "geral",
        };
        write!(f, "{name}")
    }
}

/// Seven-level sentiment intensity bucket.
///
/// Buckets are non-overlapping and evaluated from the highest threshold down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    MuitoPositivo,
    Positivo,
    LevementePositivo,
    Neutro,
    LevementeNegativo,
    Negativo,
    MuitoNegativo,
}

impl Intensity {
    /// Maps a score in [-1, 1] to its intensity bucket.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score >= 0.7 {
            Intensity::MuitoPositivo
        } else if score >= 0.3 {
            Intensity::Positivo
        } else if score >= 0.1 {
            Intensity::LevementePositivo
        } else if score >= -0.1 {
            Intensity::Neutro
        } else if score >= -0.3 {
            Intensity::LevementeNegativo
        } else if score >= -0.7 {
            Intensity::Negativo
        } else {
            Intensity::MuitoNegativo
        }
    }
}

/// Sentiment attributed to one theme of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicSentimentResult {
    pub theme: Theme,
    pub sentiment: SentimentLabel,
    pub intensity: Intensity,
    pub confidence: f32,
    /// Matched keywords, in table order (positive table first).
    pub keywords: Vec<String>,
    pub score: f32,
}

/// Sentiment of the whole text, averaged over its themes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallSentiment {
    pub sentiment: SentimentLabel,
    pub intensity: Intensity,
    pub score: f32,
}

/// Full thematic analysis of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicAnalysisResult {
    pub text: String,
    pub results: Vec<ThematicSentimentResult>,
    pub overall: OverallSentiment,
}

#[derive(Debug)]
struct ThemeKeywords {
    theme: Theme,
    positive: Vec<String>,
    negative: Vec<String>,
}

impl ThemeKeywords {
    fn new(theme: Theme, positive: &[&str], negative: &[&str]) -> Self {
        Self {
            theme,
            positive: positive.iter().map(|k| (*k).to_string()).collect(),
            negative: negative.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Normalization constant for the `general` fallback theme.
///
/// Named themes normalize by their own table size; the fallback keeps the
/// fixed divisor the original scoring used.
const GENERAL_DIVISOR: f32 = 3.0;

/// Thematic sentiment analyzer.
///
/// Matching is substring-based over the lowercased raw text, not tokenized,
/// so multi-word keywords ("demora no atendimento") match as phrases.
#[derive(Debug)]
pub struct ThematicAnalyzer {
    themes: Vec<ThemeKeywords>,
    general_positive: Vec<String>,
    general_negative: Vec<String>,
    very_positive: Vec<String>,
    very_negative: Vec<String>,
}

impl Default for ThematicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThematicAnalyzer {
    /// Create an analyzer with the default Portuguese keyword tables.
    #[must_use]
    pub fn new() -> Self {
        let to_vec = |table: &[&str]| -> Vec<String> {
            table.iter().map(|k| (*k).to_string()).collect()
        };

        Self {
            themes: vec![
                ThemeKeywords::new(
                    Theme::Service,
                    lexicon::SERVICE_POSITIVE,
                    lexicon::SERVICE_NEGATIVE,
                ),
                ThemeKeywords::new(
                    Theme::Product,
                    lexicon::PRODUCT_POSITIVE,
                    lexicon::PRODUCT_NEGATIVE,
                ),
                ThemeKeywords::new(
                    Theme::Price,
                    lexicon::PRICE_POSITIVE,
                    lexicon::PRICE_NEGATIVE,
                ),
            ],
            general_positive: to_vec(lexicon::GENERAL_POSITIVE),
            general_negative: to_vec(lexicon::GENERAL_NEGATIVE),
            very_positive: to_vec(lexicon::VERY_POSITIVE_PHRASES),
            very_negative: to_vec(lexicon::VERY_NEGATIVE_PHRASES),
        }
    }

    /// Analyzes a text, attributing sentiment to each detected theme.
    ///
    /// The overall score is the arithmetic mean of the per-theme scores; the
    /// `general` fallback guarantees at least one theme is always present.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::thematic::{Theme, ThematicAnalyzer};
    ///
    /// let analyzer = ThematicAnalyzer::new();
    /// let analysis = analyzer.analyze("gostei bastante");
    /// assert_eq!(analysis.results[0].theme, Theme::General);
    /// ```
    #[must_use]
    pub fn analyze(&self, text: &str) -> ThematicAnalysisResult {
        let lower = text.to_lowercase();
        let bonus = self.intensity_bonus(&lower);

        let mut results: Vec<ThematicSentimentResult> = self
            .themes
            .iter()
            .filter_map(|keywords| Self::score_theme(keywords, &lower, bonus))
            .collect();

        if results.is_empty() {
            results.push(self.score_general(&lower, bonus));
        }

        let overall_score =
            results.iter().map(|r| r.score).sum::<f32>() / results.len() as f32;
        let overall = OverallSentiment {
            sentiment: SentimentLabel::from_score(overall_score),
            intensity: Intensity::from_score(overall_score),
            score: overall_score,
        };

        ThematicAnalysisResult {
            text: text.to_string(),
            results,
            overall,
        }
    }

    /// Sums +0.5 per very-positive phrase and -0.5 per very-negative phrase
    /// present anywhere in the text, clamped to [-1, 1].
    fn intensity_bonus(&self, lower: &str) -> f32 {
        let positive = self
            .very_positive
            .iter()
            .filter(|p| lower.contains(p.as_str()))
            .count() as f32;
        let negative = self
            .very_negative
            .iter()
            .filter(|p| lower.contains(p.as_str()))
            .count() as f32;
        (positive * 0.5 - negative * 0.5).clamp(-1.0, 1.0)
    }

    fn score_theme(
        keywords: &ThemeKeywords,
        lower: &str,
        bonus: f32,
    ) -> Option<ThematicSentimentResult> {
        let matched_positive: Vec<&String> = keywords
            .positive
            .iter()
            .filter(|k| lower.contains(k.as_str()))
            .collect();
        let matched_negative: Vec<&String> = keywords
            .negative
            .iter()
            .filter(|k| lower.contains(k.as_str()))
            .collect();

        if matched_positive.is_empty() && matched_negative.is_empty() {
            return None;
        }

        let positive_hits = matched_positive.len() as f32;
        let negative_hits = matched_negative.len() as f32;
        let divisor = keywords.positive.len().max(keywords.negative.len()) as f32;

        let score = ((positive_hits - negative_hits) / divisor.max(1.0) + bonus)
            .clamp(-1.0, 1.0);
        let matched = positive_hits + negative_hits;

        let mut matched_keywords: Vec<String> =
            matched_positive.into_iter().cloned().collect();
        matched_keywords.extend(matched_negative.into_iter().cloned());

        Some(ThematicSentimentResult {
            theme: keywords.theme,
            sentiment: SentimentLabel::from_score(score),
            intensity: Intensity::from_score(score),
            confidence: (matched / 3.0).min(1.0),
            keywords: matched_keywords,
            score,
        })
    }

    /// Fallback scoring when no named theme matched.
    fn score_general(&self, lower: &str, bonus: f32) -> ThematicSentimentResult {
        let matched_positive: Vec<&String> = self
            .general_positive
            .iter()
            .filter(|k| lower.contains(k.as_str()))
            .collect();
        let matched_negative: Vec<&String> = self
            .general_negative
            .iter()
            .filter(|k| lower.contains(k.as_str()))
            .collect();

        let positive_hits = matched_positive.len() as f32;
        let negative_hits = matched_negative.len() as f32;

        let score =
            ((positive_hits - negative_hits) / GENERAL_DIVISOR + bonus).clamp(-1.0, 1.0);
        let matched = positive_hits + negative_hits;

        let mut matched_keywords: Vec<String> =
            matched_positive.into_iter().cloned().collect();
        matched_keywords.extend(matched_negative.into_iter().cloned());

        ThematicSentimentResult {
            theme: Theme::General,
            sentiment: SentimentLabel::from_score(score),
            intensity: Intensity::from_score(score),
            confidence: (matched / 3.0).min(1.0),
            keywords: matched_keywords,
            score,
        }
    }
}
