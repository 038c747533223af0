//! Threshold-rule insight generation.
//!
//! Turns aggregate results into short human-readable Portuguese sentences.
//! The output is data for the presentation layer, not UI; ordering is stable
//! and every rule is a fixed threshold over already-computed values.

use crate::aggregate::{BatchSentimentSummary, ThematicSummary};
use crate::cluster::ClusterResult;
use crate::stats::{OutlierReport, StatisticalSummary};
use crate::thematic::Theme;
use std::collections::BTreeMap;

const POSITIVE_AVERAGE: f32 = 0.3;
const NEGATIVE_AVERAGE: f32 = -0.3;
const NEGATIVE_SHARE_ALERT: f32 = 0.3;
const POSITIVE_SHARE_PRAISE: f32 = 0.7;
const THEME_SIGNAL: f32 = 0.1;
const GOOD_SILHOUETTE: f32 = 0.5;
const WEAK_SILHOUETTE: f32 = 0.25;
const DIVIDED_STD_DEV: f32 = 1.0;

/// Insights over the flat sentiment counts.
#[must_use]
pub fn sentiment_insights(summary: &BatchSentimentSummary) -> Vec<String> {
    let mut insights = Vec::new();

    if summary.total == 0 {
        insights.push("Ainda não há respostas suficientes para gerar insights.".to_string());
        return insights;
    }

    if summary.average_score >= POSITIVE_AVERAGE {
        insights.push(format!(
            "Sentimento geral positivo: pontuação média de {:.2}.",
            summary.average_score
        ));
    } else if summary.average_score <= NEGATIVE_AVERAGE {
        insights.push(format!(
            "Sentimento geral negativo: pontuação média de {:.2}. Atenção recomendada.",
            summary.average_score
        ));
    }

    let total = summary.total as f32;
    let negative_share = summary.negative as f32 / total;
    let positive_share = summary.positive as f32 / total;

    if negative_share > NEGATIVE_SHARE_ALERT {
        insights.push(format!(
            "{:.0}% das respostas têm sentimento negativo.",
            negative_share * 100.0
        ));
    }
    if positive_share > POSITIVE_SHARE_PRAISE {
        insights.push(format!(
            "{:.0}% das respostas têm sentimento positivo.",
            positive_share * 100.0
        ));
    }

    insights
}

/// Insights over the per-theme summaries: best and worst themes by average.
#[must_use]
pub fn thematic_insights(summaries: &BTreeMap<Theme, ThematicSummary>) -> Vec<String> {
    let mut insights = Vec::new();

    let best = summaries
        .iter()
        .max_by(|a, b| {
            a.1.average_score
                .partial_cmp(&b.1.average_score)
                .expect("scores must not be NaN")
        });
    let worst = summaries
        .iter()
        .min_by(|a, b| {
            a.1.average_score
                .partial_cmp(&b.1.average_score)
                .expect("scores must not be NaN")
        });

    if let Some((theme, summary)) = best {
        if summary.average_score > THEME_SIGNAL {
            insights.push(format!(
                "O tema {theme} concentra as melhores avaliações (média {:.2}).",
                summary.average_score
            ));
        }
    }
    if let Some((theme, summary)) = worst {
        if summary.average_score < -THEME_SIGNAL {
            insights.push(format!(
                "O tema {theme} concentra as piores avaliações (média {:.2}).",
                summary.average_score
            ));
        }
    }

    insights
}

/// Insights over a clustering result: segmentation quality and the largest
/// segment.
#[must_use]
pub fn cluster_insights(result: &ClusterResult) -> Vec<String> {
    let mut insights = Vec::new();

    if result.summary.total_points == 0 {
        return insights;
    }

    if result.silhouette_score >= GOOD_SILHOUETTE {
        insights.push(format!(
            "Segmentação bem definida (silhueta {:.2}).",
            result.silhouette_score
        ));
    } else if result.silhouette_score < WEAK_SILHOUETTE {
        insights.push(format!(
            "Segmentos pouco distintos (silhueta {:.2}).",
            result.silhouette_score
        ));
    }

    if let Some((idx, size)) = result
        .summary
        .cluster_sizes
        .iter()
        .enumerate()
        .max_by_key(|&(_, size)| *size)
    {
        if let Some(label) = result.cluster_labels.get(idx) {
            insights.push(format!("Maior segmento: {label} com {size} respostas."));
        }
    }

    insights
}

/// Insights over a numeric rating sample.
#[must_use]
pub fn rating_insights(summary: &StatisticalSummary, outliers: &OutlierReport) -> Vec<String> {
    let mut insights = Vec::new();

    if summary.count == 0 {
        return insights;
    }

    if summary.std_dev > DIVIDED_STD_DEV {
        insights.push(format!(
            "Avaliações divididas: desvio padrão de {:.2}.",
            summary.std_dev
        ));
    }
    if !outliers.outliers.is_empty() {
        insights.push(format!(
            "{} resposta(s) fora do padrão identificada(s).",
            outliers.outliers.len()
        ));
    }

    insights
}

/// Combined sentiment and thematic insights for one survey.
///
/// # Examples
///
/// ```
/// use sentir::aggregate::{analyze_batch, analyze_multiple_texts};
/// use sentir::insight::generate_insights;
/// use sentir::sentiment::SentimentAnalyzer;
/// use sentir::thematic::ThematicAnalyzer;
///
/// let texts = ["ótimo produto, excelente", "muito bom", "adorei, perfeito"];
/// let batch = analyze_batch(&SentimentAnalyzer::new(), &texts);
/// let thematic = analyze_multiple_texts(&ThematicAnalyzer::new(), &texts);
///
/// let insights = generate_insights(&batch, &thematic.summary);
/// assert!(!insights.is_empty());
/// ```
#[must_use]
pub fn generate_insights(
    batch: &BatchSentimentSummary,
    themes: &BTreeMap<Theme, ThematicSummary>,
) -> Vec<String> {
    let mut insights = sentiment_insights(batch);
    insights.extend(thematic_insights(themes));
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{analyze_batch, analyze_multiple_texts};
    use crate::sentiment::SentimentAnalyzer;
    use crate::thematic::ThematicAnalyzer;

    #[test]
    fn test_empty_batch_fallback_message() {
        let summary = BatchSentimentSummary::default();
        let insights = sentiment_insights(&summary);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("não há respostas"));
    }

    #[test]
    fn test_positive_batch_praised() {
        let texts = ["ótimo excelente", "adorei perfeito", "muito bom gostei"];
        let summary = analyze_batch(&SentimentAnalyzer::new(), &texts);
        let insights = sentiment_insights(&summary);
        assert!(insights.iter().any(|i| i.contains("positivo")));
    }

    #[test]
    fn test_negative_share_alert() {
        let texts = ["péssimo", "horrível", "ruim demais", "ok"];
        let summary = analyze_batch(&SentimentAnalyzer::new(), &texts);
        let insights = sentiment_insights(&summary);
        assert!(insights.iter().any(|i| i.contains("negativo")));
    }

    #[test]
    fn test_thematic_worst_theme_flagged() {
        let texts = ["muito caro, preço abusivo", "caro demais", "atendimento excelente"];
        let batch = analyze_multiple_texts(&ThematicAnalyzer::new(), &texts);
        let insights = thematic_insights(&batch.summary);
        assert!(
            insights.iter().any(|i| i.contains("preço")),
            "expected price theme flagged in {insights:?}"
        );
    }

    #[test]
    fn test_cluster_insights_mention_largest_segment() {
        use crate::cluster::KMeans;
        use crate::primitives::Matrix;

        let data = Matrix::from_vec(
            6,
            2,
            vec![0.9, 1.0, 0.8, 1.0, 1.0, 0.9, -0.9, 0.1, -0.8, 0.2, -1.0, 0.1],
        )
        .expect("valid shape");
        let result = KMeans::new(2).with_random_state(42).cluster(&data);
        let insights = cluster_insights(&result);
        assert!(insights.iter().any(|i| i.contains("Maior segmento")));
    }

    #[test]
    fn test_cluster_insights_empty_result() {
        let insights = cluster_insights(&ClusterResult::default());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_rating_insights_outliers() {
        let values = [4.0, 4.5, 4.0, 5.0, 4.5, 4.0, 1.0];
        let summary = crate::stats::describe(&values);
        let outliers = crate::stats::identify_outliers(&values);
        let insights = rating_insights(&summary, &outliers);
        assert!(insights.iter().any(|i| i.contains("fora do padrão")));
    }

    #[test]
    fn test_rating_insights_empty() {
        let summary = crate::stats::describe(&[]);
        let outliers = crate::stats::identify_outliers(&[]);
        assert!(rating_insights(&summary, &outliers).is_empty());
    }

    #[test]
    fn test_generate_insights_combines_sections() {
        let texts = ["ótimo excelente", "muito caro", "adorei perfeito"];
        let batch = analyze_batch(&SentimentAnalyzer::new(), &texts);
        let thematic = analyze_multiple_texts(&ThematicAnalyzer::new(), &texts);
        let combined = generate_insights(&batch, &thematic.summary);
        let sentiment_only = sentiment_insights(&batch);
        assert!(combined.len() >= sentiment_only.len());
    }
}
