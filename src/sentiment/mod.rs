//! Lexicon-based sentiment scoring.
//!
//! The scorer normalizes a text, tokenizes it, matches tokens against the
//! polarity tables, and applies one-token-back negation and intensification
//! before normalizing the accumulated magnitudes into a score in [-1, 1].
//!
//! Every path returns a well-formed [`SentimentResult`]; malformed or empty
//! input never raises an error.
//!
//! # Examples
//!
//! ```
//! use sentir::sentiment::{SentimentAnalyzer, SentimentLabel};
//!
//! let analyzer = SentimentAnalyzer::new();
//!
//! let result = analyzer.analyze("ótimo produto, super recomendo");
//! assert_eq!(result.label, SentimentLabel::Positive);
//! assert!(result.score > 0.1);
//!
//! let result = analyzer.analyze("não gostei");
//! assert_eq!(result.label, SentimentLabel::Negative);
//! ```

use crate::lexicon::SentimentLexicon;
use serde::{Deserialize, Serialize};

/// Sentiment classification of a single text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Maps a score in [-1, 1] to a label.
    ///
    /// Thresholds: above 0.1 positive, below -0.1 negative, neutral between.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score > 0.1 {
            SentimentLabel::Positive
        } else if score < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Result of scoring one text.
///
/// `score` is always in [-1, 1] and `confidence` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f32,
    pub confidence: f32,
}

impl SentimentResult {
    fn neutral(confidence: f32) -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
            confidence,
        }
    }
}

/// Lexicon-based sentiment scorer.
///
/// Stateless between calls; every invocation is a pure function of its
/// arguments and the fixed lexicon.
///
/// # Examples
///
/// ```
/// use sentir::sentiment::SentimentAnalyzer;
///
/// let analyzer = SentimentAnalyzer::new();
/// let bom = analyzer.analyze("bom").score;
/// let muito_bom = analyzer.analyze("muito bom").score;
/// assert!(muito_bom > bom);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
}

/// Lowercases, maps punctuation to spaces, collapses whitespace, and trims.
fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl SentimentAnalyzer {
    /// Create an analyzer with the default Portuguese lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::portuguese(),
        }
    }

    /// Create an analyzer with a custom lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Scores a text into label, score, and confidence.
    ///
    /// - Empty or whitespace-only input yields `(Neutral, 0.0, 0.0)`.
    /// - A text with no sentiment-bearing words yields `(Neutral, 0.0, 0.5)`.
    /// - Tokens shorter than 2 characters are skipped entirely.
    /// - A negator immediately before a word inverts its polarity; an
    ///   intensifier immediately before multiplies its magnitude by 1.5.
    ///   Only one token back is inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::sentiment::{SentimentAnalyzer, SentimentLabel};
    ///
    /// let analyzer = SentimentAnalyzer::new();
    /// let result = analyzer.analyze("");
    /// assert_eq!(result.label, SentimentLabel::Neutral);
    /// assert_eq!(result.confidence, 0.0);
    /// ```
    #[must_use]
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return SentimentResult::neutral(0.0);
        }

        let tokens: Vec<&str> = normalized
            .split(' ')
            .filter(|t| t.chars().count() >= 2)
            .collect();

        if tokens.is_empty() {
            return SentimentResult::neutral(0.0);
        }

        let mut positive_total = 0.0f32;
        let mut negative_total = 0.0f32;

        for (i, token) in tokens.iter().enumerate() {
            let base = if self.lexicon.is_positive(token) {
                1.0
            } else if self.lexicon.is_negative(token) {
                -1.0
            } else {
                continue;
            };

            let mut word_score = base;
            if i > 0 {
                let prev = tokens[i - 1];
                if self.lexicon.is_negator(prev) {
                    word_score = -word_score;
                }
                if self.lexicon.is_intensifier(prev) {
                    word_score *= 1.5;
                }
            }

            if word_score > 0.0 {
                positive_total += word_score;
            } else {
                negative_total += -word_score;
            }
        }

        let magnitude = positive_total + negative_total;
        if magnitude == 0.0 {
            return SentimentResult::neutral(0.5);
        }

        // The +1 keeps the denominator positive while letting the intensifier
        // effect stay strictly monotone instead of clamping against the bound.
        let score = ((positive_total - negative_total) / (magnitude + 1.0)).clamp(-1.0, 1.0);

        let ratio = magnitude / (tokens.len() as f32).max(1.0);
        let confidence = (ratio * 2.0).clamp(0.1, 0.9);

        SentimentResult {
            label: SentimentLabel::from_score(score),
            score,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new()
    }

    #[test]
    fn test_empty_input() {
        let result = analyzer().analyze("");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_whitespace_only_input() {
        let result = analyzer().analyze("   \t\n ");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_positive_text() {
        let result = analyzer().analyze("ótimo produto");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.1);
    }

    #[test]
    fn test_negation_inverts_polarity() {
        let result = analyzer().analyze("não gostei");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score < -0.1);
    }

    #[test]
    fn test_intensifier_amplifies() {
        let bom = analyzer().analyze("bom");
        let muito_bom = analyzer().analyze("muito bom");
        assert_eq!(bom.label, SentimentLabel::Positive);
        assert_eq!(muito_bom.label, SentimentLabel::Positive);
        assert!(muito_bom.score > bom.score);
    }

    #[test]
    fn test_no_sentiment_words_gets_half_confidence() {
        let result = analyzer().analyze("entrega chegou ontem");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_neutral_words_not_sentiment_bearing() {
        let result = analyzer().analyze("produto normal");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_short_tokens_skipped() {
        // "é" is a single character and must be skipped entirely, so this is
        // equivalent to "bom" alone.
        let with_short = analyzer().analyze("é bom");
        let without = analyzer().analyze("bom");
        assert_eq!(with_short.score, without.score);
        assert_eq!(with_short.confidence, without.confidence);
    }

    #[test]
    fn test_punctuation_stripped() {
        let clean = analyzer().analyze("ótimo produto");
        let noisy = analyzer().analyze("Ótimo!!! ... produto???");
        assert_eq!(clean.score, noisy.score);
        assert_eq!(clean.label, noisy.label);
    }

    #[test]
    fn test_mixed_text_balances() {
        // One positive and one negative word cancel out.
        let result = analyzer().analyze("comida boa entrega ruim");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!(result.score.abs() <= 0.1);
    }

    #[test]
    fn test_negated_negative_counts_positive() {
        let result = analyzer().analyze("sem problema nenhum");
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_lookback_is_one_token_only() {
        // The negator is two tokens before "bom": the inversion must not apply.
        let result = analyzer().analyze("não chegou bom");
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.11), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.11), SentimentLabel::Negative);
    }

    #[test]
    fn test_score_and_confidence_bounds() {
        let texts = [
            "",
            "   ",
            "bom",
            "muito bom",
            "péssimo horrível ruim ruim ruim",
            "ótimo excelente maravilhoso perfeito incrível adorei",
            "não não não",
            "texto sem palavras conhecidas aqui",
        ];
        for text in texts {
            let result = analyzer().analyze(text);
            assert!(
                (-1.0..=1.0).contains(&result.score),
                "score out of range for {text:?}"
            );
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence out of range for {text:?}"
            );
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_score_and_confidence_bounded(text in ".{0,200}") {
                let result = SentimentAnalyzer::new().analyze(&text);
                prop_assert!((-1.0..=1.0).contains(&result.score));
                prop_assert!((0.0..=1.0).contains(&result.confidence));
            }

            #[test]
            fn prop_label_consistent_with_score(text in "[a-zà-ú ]{0,120}") {
                let result = SentimentAnalyzer::new().analyze(&text);
                prop_assert_eq!(result.label, SentimentLabel::from_score(result.score));
            }
        }
    }
}
