//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sentir::prelude::*;
//!
//! let analyzer = SentimentAnalyzer::new();
//! let result = analyzer.analyze("muito bom");
//! assert_eq!(result.label, SentimentLabel::Positive);
//! ```

pub use crate::aggregate::{
    analyze_batch, analyze_multiple_texts, BatchSentimentSummary, IntensityDistribution,
    KeywordFrequency, ThematicBatchResult, ThematicSummary,
};
pub use crate::cluster::{
    calculate_predictive_models, ClusterResult, ClusterSummary, KMeans, PredictiveModels,
};
pub use crate::error::{Result, SentirError};
pub use crate::insight::generate_insights;
pub use crate::lexicon::SentimentLexicon;
pub use crate::metrics::{inertia, silhouette_score};
pub use crate::primitives::{Matrix, Vector};
pub use crate::response::{feature_matrix, SurveyResponse};
pub use crate::sentiment::{SentimentAnalyzer, SentimentLabel, SentimentResult};
pub use crate::stats::{
    correlation, describe, identify_outliers, Correlation, Mode, OutlierReport,
    StatisticalSummary,
};
pub use crate::thematic::{
    Intensity, OverallSentiment, Theme, ThematicAnalysisResult, ThematicAnalyzer,
    ThematicSentimentResult,
};
pub use crate::traits::UnsupervisedEstimator;
