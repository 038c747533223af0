//! Descriptive statistics for numeric response data.
//!
//! Pure functions over slices of f32 (ratings, derived sentiment scores):
//!
//! - Central tendency: mean, median, mode
//! - Spread: population variance and standard deviation, range
//! - Percentiles via linear interpolation between order statistics
//! - Pearson correlation with categorical strength and direction
//! - Outlier detection via IQR fences
//!
//! Every function maps empty input to a zeroed or empty result instead of
//! erroring; callers are responsible for passing finite values.
//!
//! # Examples
//!
//! ```
//! use sentir::stats;
//!
//! let ratings = [4.0, 5.0, 3.0, 4.0, 5.0];
//! let summary = stats::describe(&ratings);
//! assert_eq!(summary.count, 5);
//! assert_eq!(summary.median, 4.0);
//! assert_eq!(summary.mode.value(), 4.0);
//! ```

use serde::{Deserialize, Serialize};

/// Arithmetic mean (0.0 for empty input).
#[must_use]
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Median; the average of the two middle elements for even-length input
/// (0.0 for empty input).
#[must_use]
pub fn median(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("values must not be NaN"));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Result of a mode computation.
///
/// `None` means every value occurs equally often, so no value stands out;
/// its numeric stand-in is 0.0 via [`Mode::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    None,
    Single(f32),
    Multiple(Vec<f32>),
}

impl Mode {
    /// Numeric stand-in: the mode, the smallest of the tied modes, or 0.0.
    #[must_use]
    pub fn value(&self) -> f32 {
        match self {
            Mode::None => 0.0,
            Mode::Single(v) => *v,
            Mode::Multiple(values) => values.first().copied().unwrap_or(0.0),
        }
    }
}

/// Most frequent value(s) of a sample.
///
/// Returns [`Mode::None`] when every distinct value has the same frequency
/// (including the empty and all-distinct cases), [`Mode::Single`] for a
/// unique winner, and [`Mode::Multiple`] (ascending) for ties at the top.
///
/// # Examples
///
/// ```
/// use sentir::stats::{mode, Mode};
///
/// assert_eq!(mode(&[1.0, 1.0, 2.0]), Mode::Single(1.0));
/// assert_eq!(mode(&[1.0, 2.0, 3.0]), Mode::None);
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), Mode::Multiple(vec![1.0, 2.0]));
/// ```
#[must_use]
pub fn mode(values: &[f32]) -> Mode {
    if values.is_empty() {
        return Mode::None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("values must not be NaN"));

    // Runs of equal values in sorted order give (value, frequency) pairs.
    let mut runs: Vec<(f32, usize)> = Vec::new();
    for &v in &sorted {
        match runs.last_mut() {
            Some((value, count)) if *value == v => *count += 1,
            _ => runs.push((v, 1)),
        }
    }

    let max_count = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let min_count = runs.iter().map(|&(_, c)| c).min().unwrap_or(0);
    if max_count == min_count {
        return Mode::None;
    }

    let winners: Vec<f32> = runs
        .iter()
        .filter(|&&(_, c)| c == max_count)
        .map(|&(v, _)| v)
        .collect();
    if winners.len() == 1 {
        Mode::Single(winners[0])
    } else {
        Mode::Multiple(winners)
    }
}

/// Population variance (divide by N, not N-1; 0.0 for empty input).
#[must_use]
pub fn variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / values.len() as f32
}

/// Population standard deviation.
#[must_use]
pub fn std_dev(values: &[f32]) -> f32 {
    variance(values).sqrt()
}

/// Percentile via linear interpolation between order statistics.
///
/// The interpolation index is `p/100 * (n - 1)`, so `percentile(v, 50.0)`
/// equals `median(v)` for any non-empty sample. `p` is clamped to [0, 100];
/// empty input yields 0.0.
#[must_use]
pub fn percentile(values: &[f32], p: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("values must not be NaN"));

    let p = p.clamp(0.0, 100.0);
    let h = p / 100.0 * (sorted.len() - 1) as f32;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = h - lower as f32;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

/// The percentile points carried by a [`StatisticalSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    pub p25: f32,
    pub p50: f32,
    pub p75: f32,
    pub p90: f32,
    pub p95: f32,
}

/// Descriptive summary of one numeric sample.
///
/// Recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    pub mean: f32,
    pub median: f32,
    pub mode: Mode,
    pub variance: f32,
    pub std_dev: f32,
    pub min: f32,
    pub max: f32,
    pub range: f32,
    pub count: usize,
    pub percentiles: Percentiles,
}

/// Computes the full descriptive summary of a sample.
///
/// Empty input yields the zeroed summary (`count == 0`, `mode == Mode::None`).
#[must_use]
pub fn describe(values: &[f32]) -> StatisticalSummary {
    if values.is_empty() {
        return StatisticalSummary {
            mean: 0.0,
            median: 0.0,
            mode: Mode::None,
            variance: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            range: 0.0,
            count: 0,
            percentiles: Percentiles::default(),
        };
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    StatisticalSummary {
        mean: mean(values),
        median: median(values),
        mode: mode(values),
        variance: variance(values),
        std_dev: std_dev(values),
        min,
        max,
        range: max - min,
        count: values.len(),
        percentiles: Percentiles {
            p25: percentile(values, 25.0),
            p50: percentile(values, 50.0),
            p75: percentile(values, 75.0),
            p90: percentile(values, 90.0),
            p95: percentile(values, 95.0),
        },
    }
}

/// Categorical strength of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl CorrelationStrength {
    fn from_coefficient(r: f32) -> Self {
        let magnitude = r.abs();
        if magnitude >= 0.9 {
            CorrelationStrength::VeryStrong
        } else if magnitude >= 0.7 {
            CorrelationStrength::Strong
        } else if magnitude >= 0.5 {
            CorrelationStrength::Moderate
        } else if magnitude >= 0.3 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::VeryWeak
        }
    }
}

/// Direction of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationDirection {
    Positive,
    Negative,
    None,
}

impl CorrelationDirection {
    fn from_coefficient(r: f32) -> Self {
        if r > 0.1 {
            CorrelationDirection::Positive
        } else if r < -0.1 {
            CorrelationDirection::Negative
        } else {
            CorrelationDirection::None
        }
    }
}

/// Pearson correlation coefficient with categorical labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub coefficient: f32,
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

impl Correlation {
    fn zero() -> Self {
        Self {
            coefficient: 0.0,
            strength: CorrelationStrength::VeryWeak,
            direction: CorrelationDirection::None,
        }
    }
}

/// Pearson correlation between two samples.
///
/// Mismatched lengths, fewer than two points, or a zero-variance sample all
/// yield the zero correlation rather than erroring.
///
/// # Examples
///
/// ```
/// use sentir::stats::{correlation, CorrelationDirection, CorrelationStrength};
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [2.0, 4.0, 6.0, 8.0];
/// let corr = correlation(&x, &y);
/// assert!(corr.coefficient > 0.99);
/// assert_eq!(corr.strength, CorrelationStrength::VeryStrong);
/// assert_eq!(corr.direction, CorrelationDirection::Positive);
/// ```
#[must_use]
pub fn correlation(x: &[f32], y: &[f32]) -> Correlation {
    if x.len() != y.len() || x.len() < 2 {
        return Correlation::zero();
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut covariance = 0.0f32;
    let mut var_x = 0.0f32;
    let mut var_y = 0.0f32;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Correlation::zero();
    }

    let coefficient = (covariance / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0);
    Correlation {
        coefficient,
        strength: CorrelationStrength::from_coefficient(coefficient),
        direction: CorrelationDirection::from_coefficient(coefficient),
    }
}

/// IQR-based outlier report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Values outside the fences, in input order.
    pub outliers: Vec<f32>,
    pub lower_bound: f32,
    pub upper_bound: f32,
    pub q1: f32,
    pub q3: f32,
    pub iqr: f32,
}

/// Flags values outside the Tukey fences `Q1 - 1.5*IQR` and `Q3 + 1.5*IQR`.
///
/// Empty input yields the zeroed report.
///
/// # Examples
///
/// ```
/// use sentir::stats::identify_outliers;
///
/// let values = [1.0, 2.0, 2.0, 3.0, 2.0, 3.0, 1.0, 50.0];
/// let report = identify_outliers(&values);
/// assert_eq!(report.outliers, vec![50.0]);
/// ```
#[must_use]
pub fn identify_outliers(values: &[f32]) -> OutlierReport {
    if values.is_empty() {
        return OutlierReport::default();
    }

    let q1 = percentile(values, 25.0);
    let q3 = percentile(values, 75.0);
    let iqr = q3 - q1;
    let lower_bound = q1 - 1.5 * iqr;
    let upper_bound = q3 + 1.5 * iqr;

    let outliers = values
        .iter()
        .copied()
        .filter(|&v| v < lower_bound || v > upper_bound)
        .collect();

    OutlierReport {
        outliers,
        lower_bound,
        upper_bound,
        q1,
        q3,
        iqr,
    }
}
