//! Sentir: lexicon-based sentiment analysis and survey response analytics in pure Rust.
//!
//! Sentir scores free-text survey responses against a fixed Portuguese
//! lexicon, attributes sentiment to themes (service, product, price),
//! aggregates batches into distributional summaries, and segments responses
//! with K-Means over a numeric feature projection. Every analysis entry point
//! is a total, side-effect-free function over in-memory data: degenerate
//! input maps to neutral or zeroed results, never errors.
//!
//! # Quick Start
//!
//! ```
//! use sentir::prelude::*;
//!
//! let analyzer = SentimentAnalyzer::new();
//!
//! let result = analyzer.analyze("ótimo produto, super recomendo");
//! assert_eq!(result.label, SentimentLabel::Positive);
//! assert!(result.score > 0.1);
//!
//! // Negation inverts polarity.
//! let result = analyzer.analyze("não gostei");
//! assert_eq!(result.label, SentimentLabel::Negative);
//! ```
//!
//! # Modules
//!
//! - [`lexicon`]: Static Portuguese polarity and theme keyword tables
//! - [`sentiment`]: Tokenizing lexicon scorer with negation/intensifier handling
//! - [`thematic`]: Theme detection and per-theme sentiment attribution
//! - [`aggregate`]: Batch analysis and distributional summaries
//! - [`stats`]: Descriptive statistics, correlation, and outlier detection
//! - [`cluster`]: K-Means segmentation and predictive heuristics
//! - [`metrics`]: Clustering quality metrics (inertia, silhouette)
//! - [`insight`]: Threshold-rule textual insights
//! - [`response`]: Survey response records and feature projection
//! - [`primitives`]: Core Vector and Matrix types
//!
//! # Design
//!
//! The persistence and presentation layers stay outside: callers fetch
//! response rows themselves and pass plain data in, then render the returned
//! structures. Clustering is the only randomized step, and its seed is
//! injectable for reproducible runs.

pub mod aggregate;
pub mod cluster;
pub mod error;
pub mod insight;
pub mod lexicon;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod response;
pub mod sentiment;
pub mod stats;
pub mod thematic;
pub mod traits;

pub use error::{Result, SentirError};
