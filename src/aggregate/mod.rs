//! Batch analysis over collections of texts.
//!
//! Runs the sentiment or thematic analyzer over every text independently
//! (order preserved, no cross-text state) and folds the per-text results into
//! distributional summaries: label counts, intensity histograms, and keyword
//! frequency tables.
//!
//! # Examples
//!
//! ```
//! use sentir::aggregate::analyze_multiple_texts;
//! use sentir::thematic::ThematicAnalyzer;
//!
//! let analyzer = ThematicAnalyzer::new();
//! let texts = ["atendimento excelente", "muito caro", "gostei"];
//! let batch = analyze_multiple_texts(&analyzer, &texts);
//!
//! assert_eq!(batch.analyses.len(), 3);
//! let total: usize = batch.summary.values().map(|s| s.total_responses).sum();
//! assert_eq!(total, 3);
//! ```

use crate::sentiment::{SentimentAnalyzer, SentimentLabel};
use crate::thematic::{Intensity, Theme, ThematicAnalysisResult, ThematicAnalyzer};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// How many keywords a theme summary keeps.
const TOP_KEYWORDS: usize = 10;

/// Histogram over the seven intensity buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityDistribution {
    pub muito_positivo: usize,
    pub positivo: usize,
    pub levemente_positivo: usize,
    pub neutro: usize,
    pub levemente_negativo: usize,
    pub negativo: usize,
    pub muito_negativo: usize,
}

impl IntensityDistribution {
    /// Increment the bucket for one observed intensity.
    pub fn record(&mut self, intensity: Intensity) {
        match intensity {
            Intensity::MuitoPositivo => self.muito_positivo += 1,
            Intensity::Positivo => self.positivo += 1,
            Intensity::LevementePositivo => self.levemente_positivo += 1,
            Intensity::Neutro => self.neutro += 1,
            Intensity::LevementeNegativo => self.levemente_negativo += 1,
            Intensity::Negativo => self.negativo += 1,
            Intensity::MuitoNegativo => self.muito_negativo += 1,
        }
    }

    /// Sum of all bucket counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.muito_positivo
            + self.positivo
            + self.levemente_positivo
            + self.neutro
            + self.levemente_negativo
            + self.negativo
            + self.muito_negativo
    }
}

/// One keyword's aggregate frequency, tagged with the sentiment of its most
/// recent occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
    pub sentiment: SentimentLabel,
}

/// Aggregate over all responses touching one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicSummary {
    pub total_responses: usize,
    pub distribution: IntensityDistribution,
    pub average_score: f32,
    /// Top keywords by occurrence count; ties keep first-encountered order.
    pub top_keywords: Vec<KeywordFrequency>,
}

/// Result of a thematic batch run: per-text analyses plus per-theme summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicBatchResult {
    pub analyses: Vec<ThematicAnalysisResult>,
    pub summary: BTreeMap<Theme, ThematicSummary>,
}

/// Flat label counts for the non-thematic batch variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub average_score: f32,
    pub average_confidence: f32,
}

#[derive(Default)]
struct ThemeAccumulator {
    distribution: IntensityDistribution,
    score_sum: f32,
    count: usize,
    // Insertion order doubles as first-encountered order for tie-breaking.
    keywords: Vec<KeywordFrequency>,
    keyword_index: HashMap<String, usize>,
}

impl ThemeAccumulator {
    fn record(&mut self, result: &crate::thematic::ThematicSentimentResult) {
        self.distribution.record(result.intensity);
        self.score_sum += result.score;
        self.count += 1;

        for keyword in &result.keywords {
            match self.keyword_index.get(keyword) {
                Some(&idx) => {
                    self.keywords[idx].count += 1;
                    self.keywords[idx].sentiment = result.sentiment;
                }
                None => {
                    self.keyword_index
                        .insert(keyword.clone(), self.keywords.len());
                    self.keywords.push(KeywordFrequency {
                        keyword: keyword.clone(),
                        count: 1,
                        sentiment: result.sentiment,
                    });
                }
            }
        }
    }

    fn into_summary(self) -> ThematicSummary {
        let average_score = if self.count == 0 {
            0.0
        } else {
            self.score_sum / self.count as f32
        };

        let mut top_keywords = self.keywords;
        // Stable sort: equal counts keep first-encountered order.
        top_keywords.sort_by(|a, b| b.count.cmp(&a.count));
        top_keywords.truncate(TOP_KEYWORDS);

        ThematicSummary {
            total_responses: self.count,
            distribution: self.distribution,
            average_score,
            top_keywords,
        }
    }
}

/// Runs the thematic analyzer over every text and aggregates per theme.
///
/// Each text is analyzed independently; the per-theme summaries count one
/// entry per (text, theme) pair, so the intensity buckets of theme X sum to
/// the number of analyses that detected X.
#[must_use]
pub fn analyze_multiple_texts<S: AsRef<str>>(
    analyzer: &ThematicAnalyzer,
    texts: &[S],
) -> ThematicBatchResult {
    let analyses: Vec<ThematicAnalysisResult> = texts
        .iter()
        .map(|text| analyzer.analyze(text.as_ref()))
        .collect();

    let mut accumulators: BTreeMap<Theme, ThemeAccumulator> = BTreeMap::new();
    for analysis in &analyses {
        for result in &analysis.results {
            accumulators
                .entry(result.theme)
                .or_default()
                .record(result);
        }
    }

    let summary = accumulators
        .into_iter()
        .map(|(theme, acc)| (theme, acc.into_summary()))
        .collect();

    ThematicBatchResult { analyses, summary }
}

/// Runs the plain sentiment scorer over every text and returns flat counts.
///
/// Used where theme attribution is unnecessary.
///
/// # Examples
///
/// ```
/// use sentir::aggregate::analyze_batch;
/// use sentir::sentiment::SentimentAnalyzer;
///
/// let analyzer = SentimentAnalyzer::new();
/// let summary = analyze_batch(&analyzer, &["ótimo", "péssimo", "ok"]);
/// assert_eq!(summary.total, 3);
/// assert_eq!(summary.positive, 1);
/// assert_eq!(summary.negative, 1);
/// ```
#[must_use]
pub fn analyze_batch<S: AsRef<str>>(
    analyzer: &SentimentAnalyzer,
    texts: &[S],
) -> BatchSentimentSummary {
    if texts.is_empty() {
        return BatchSentimentSummary::default();
    }

    let mut summary = BatchSentimentSummary::default();
    let mut score_sum = 0.0f32;
    let mut confidence_sum = 0.0f32;

    for text in texts {
        let result = analyzer.analyze(text.as_ref());
        summary.total += 1;
        match result.label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
            SentimentLabel::Negative => summary.negative += 1,
        }
        score_sum += result.score;
        confidence_sum += result.confidence;
    }

    summary.average_score = score_sum / summary.total as f32;
    summary.average_confidence = confidence_sum / summary.total as f32;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyses_preserve_order() {
        let analyzer = ThematicAnalyzer::new();
        let texts = ["atendimento excelente", "muito caro"];
        let batch = analyze_multiple_texts(&analyzer, &texts);
        assert_eq!(batch.analyses.len(), 2);
        assert_eq!(batch.analyses[0].text, "atendimento excelente");
        assert_eq!(batch.analyses[1].text, "muito caro");
    }

    #[test]
    fn test_histogram_buckets_sum_to_theme_count() {
        let analyzer = ThematicAnalyzer::new();
        let texts = [
            "atendimento excelente",
            "mal atendido e grosseiro",
            "muito caro",
            "produto ótimo, boa qualidade",
            "gostei",
        ];
        let batch = analyze_multiple_texts(&analyzer, &texts);

        for (theme, summary) in &batch.summary {
            let occurrences = batch
                .analyses
                .iter()
                .flat_map(|a| &a.results)
                .filter(|r| r.theme == *theme)
                .count();
            assert_eq!(
                summary.distribution.total(),
                occurrences,
                "bucket sum mismatch for theme {theme}"
            );
            assert_eq!(summary.total_responses, occurrences);
        }
    }

    #[test]
    fn test_average_score_per_theme() {
        let analyzer = ThematicAnalyzer::new();
        let texts = ["muito caro", "preço justo"];
        let batch = analyze_multiple_texts(&analyzer, &texts);

        let price = batch.summary.get(&Theme::Price).expect("price summary");
        let scores: Vec<f32> = batch
            .analyses
            .iter()
            .flat_map(|a| &a.results)
            .filter(|r| r.theme == Theme::Price)
            .map(|r| r.score)
            .collect();
        let mean = scores.iter().sum::<f32>() / scores.len() as f32;
        assert!((price.average_score - mean).abs() < 1e-6);
    }

    #[test]
    fn test_keyword_counts_accumulate() {
        let analyzer = ThematicAnalyzer::new();
        let texts = ["muito caro", "muito caro mesmo", "preço justo"];
        let batch = analyze_multiple_texts(&analyzer, &texts);

        let price = batch.summary.get(&Theme::Price).expect("price summary");
        let caro = price
            .top_keywords
            .iter()
            .find(|k| k.keyword == "muito caro")
            .expect("keyword tracked");
        assert_eq!(caro.count, 2);
        // Most frequent keyword sorts first.
        assert_eq!(price.top_keywords[0].keyword, "muito caro");
    }

    #[test]
    fn test_keyword_sentiment_is_most_recent() {
        let analyzer = ThematicAnalyzer::new();
        // "grosseiro" appears negative first, then inside a text whose service
        // score turns positive thanks to the very-positive phrase bonus.
        let texts = ["grosseiro", "grosseiro, mas no fim excelente atendimento excelente"];
        let batch = analyze_multiple_texts(&analyzer, &texts);

        let service = batch.summary.get(&Theme::Service).expect("service summary");
        let keyword = service
            .top_keywords
            .iter()
            .find(|k| k.keyword == "grosseiro")
            .expect("keyword tracked");
        assert_eq!(keyword.count, 2);
        let last = batch.analyses[1]
            .results
            .iter()
            .find(|r| r.theme == Theme::Service)
            .expect("service result");
        assert_eq!(keyword.sentiment, last.sentiment);
    }

    #[test]
    fn test_empty_batch() {
        let analyzer = ThematicAnalyzer::new();
        let batch = analyze_multiple_texts(&analyzer, &Vec::<String>::new());
        assert!(batch.analyses.is_empty());
        assert!(batch.summary.is_empty());
    }

    #[test]
    fn test_flat_batch_counts() {
        let analyzer = SentimentAnalyzer::new();
        let summary = analyze_batch(
            &analyzer,
            &["ótimo produto", "péssimo atendimento", "chegou ontem"],
        );
        assert_eq!(summary.total, 3);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
        assert!((-1.0..=1.0).contains(&summary.average_score));
        assert!((0.0..=1.0).contains(&summary.average_confidence));
    }

    #[test]
    fn test_flat_batch_empty() {
        let analyzer = SentimentAnalyzer::new();
        let summary = analyze_batch(&analyzer, &Vec::<&str>::new());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.average_confidence, 0.0);
    }
}
