//! Response clustering.
//!
//! K-Means over the response feature matrix (sentiment score, scaled rating,
//! normalized text length), with k-means++ seeding, silhouette grading, and
//! descriptive Portuguese cluster labels. A complementary set of predictive
//! heuristics derives recommendation/satisfaction/churn probabilities from a
//! score sample.
//!
//! # Algorithm
//!
//! 1. Seed centroids with k-means++ (roulette-wheel over squared distances)
//! 2. Assign each point to its nearest centroid (Euclidean distance)
//! 3. Recompute centroids as the mean of assigned points
//! 4. Stop on identical assignments, small centroid movement, or the
//!    iteration cap
//!
//! # Examples
//!
//! ```
//! use sentir::cluster::KMeans;
//! use sentir::primitives::Matrix;
//!
//! let data = Matrix::from_vec(6, 2, vec![
//!     0.9, 5.0,
//!     0.8, 4.0,
//!     1.0, 5.0,
//!     -0.9, 1.0,
//!     -0.8, 2.0,
//!     -1.0, 1.0,
//! ]).expect("valid shape");
//!
//! let result = KMeans::new(2).with_random_state(42).cluster(&data);
//! assert_eq!(result.summary.cluster_sizes.iter().sum::<usize>(), 6);
//! assert!(result.convergence_reached);
//! ```

use crate::error::{Result, SentirError};
use crate::metrics::{inertia, silhouette_score};
use crate::primitives::Matrix;
use crate::stats;
use crate::traits::UnsupervisedEstimator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Aggregate shape of a clustering result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub total_points: usize,
    pub dimensions: usize,
    pub cluster_sizes: Vec<usize>,
}

/// Result of one clustering invocation.
///
/// Created fresh per call and never mutated afterwards. `centroids` is a
/// flat row-major array of `k * dimensions` values, and the cluster sizes
/// always sum to the number of input points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    /// Raw feature vectors grouped by assigned cluster.
    pub clusters: Vec<Vec<Vec<f32>>>,
    /// Flat row-major centroid coordinates (`k * dimensions`).
    pub centroids: Vec<f32>,
    pub iterations: usize,
    pub convergence_reached: bool,
    pub silhouette_score: f32,
    /// One descriptive label per cluster, e.g. "Grupo Principal Positivo".
    pub cluster_labels: Vec<String>,
    pub summary: ClusterSummary,
}

/// K-Means clustering with k-means++ initialization.
///
/// [`KMeans::cluster`] is the total entry point: degenerate input (empty
/// data, k = 0) yields the zeroed [`ClusterResult`] with
/// `convergence_reached == false` instead of an error. The
/// [`UnsupervisedEstimator`] seam offers the stateful fit/predict surface for
/// callers that assign new responses to an existing segmentation.
///
/// # Examples
///
/// ```
/// use sentir::cluster::KMeans;
/// use sentir::primitives::Matrix;
///
/// let empty = Matrix::from_vec(0, 3, vec![]).expect("valid shape");
/// let result = KMeans::new(3).cluster(&empty);
/// assert!(!result.convergence_reached);
/// assert!(result.clusters.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Number of clusters.
    n_clusters: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Aggregate absolute centroid movement below which iteration stops.
    tol: f32,
    /// Random seed for reproducible seeding.
    random_state: Option<u64>,
    /// Cluster centroids after fitting.
    centroids: Option<Matrix<f32>>,
    /// Labels for training data.
    labels: Option<Vec<usize>>,
    /// Sum of squared distances (inertia).
    inertia: f32,
    /// Number of iterations run.
    n_iter: usize,
}

struct RunOutcome {
    centroids: Matrix<f32>,
    labels: Vec<usize>,
    n_iter: usize,
    converged: bool,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(3)
    }
}

impl KMeans {
    /// Creates a new K-Means with the specified number of clusters.
    #[must_use]
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 100,
            tol: 1e-3,
            random_state: None,
            centroids: None,
            labels: None,
            inertia: 0.0,
            n_iter: 0,
        }
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance (aggregate absolute centroid movement).
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Returns the cluster centroids.
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn centroids(&self) -> &Matrix<f32> {
        self.centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the inertia (within-cluster sum of squares).
    #[must_use]
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Returns the number of iterations run.
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.centroids.is_some()
    }

    /// Runs the full clustering and packages the result.
    ///
    /// Total function: empty data or `k == 0` yields the zeroed result with
    /// `convergence_reached == false`.
    #[must_use]
    pub fn cluster(&self, data: &Matrix<f32>) -> ClusterResult {
        let (n_samples, n_features) = data.shape();
        if n_samples == 0 || self.n_clusters == 0 {
            return ClusterResult::default();
        }

        let outcome = self.run(data);

        let mut clusters: Vec<Vec<Vec<f32>>> = vec![Vec::new(); self.n_clusters];
        for (i, &label) in outcome.labels.iter().enumerate() {
            clusters[label].push(data.row(i).as_slice().to_vec());
        }
        let cluster_sizes: Vec<usize> = clusters.iter().map(Vec::len).collect();

        let cluster_labels = (0..self.n_clusters)
            .map(|k| {
                let tone_value = if n_features > 0 {
                    outcome.centroids.get(k, 0)
                } else {
                    0.0
                };
                let share = cluster_sizes[k] as f32 / n_samples as f32;
                describe_cluster(tone_value, share)
            })
            .collect();

        ClusterResult {
            silhouette_score: silhouette_score(data, &outcome.labels),
            clusters,
            centroids: outcome.centroids.as_slice().to_vec(),
            iterations: outcome.n_iter,
            convergence_reached: outcome.converged,
            cluster_labels,
            summary: ClusterSummary {
                total_points: n_samples,
                dimensions: n_features,
                cluster_sizes,
            },
        }
    }

    /// Lloyd iterations over k-means++ seeds.
    fn run(&self, x: &Matrix<f32>) -> RunOutcome {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut centroids = self.seed_centroids(x, &mut rng);
        let mut labels: Vec<usize> = Vec::new();
        let mut converged = false;
        let mut n_iter = 0;

        // At least one assignment pass, so every point always has a label.
        for iter in 0..self.max_iter.max(1) {
            n_iter = iter + 1;

            let new_labels = self.assign_labels(x, &centroids);
            let assignments_stable = iter > 0 && new_labels == labels;
            labels = new_labels;

            let new_centroids = self.update_centroids(x, &labels, &centroids);
            let movement = aggregate_movement(&centroids, &new_centroids);
            centroids = new_centroids;

            if assignments_stable || movement < self.tol {
                converged = true;
                break;
            }
        }

        RunOutcome {
            centroids,
            labels,
            n_iter,
            converged,
        }
    }

    /// Initializes centroids using k-means++.
    ///
    /// The first centroid is drawn uniformly at random; each subsequent one
    /// by roulette-wheel sampling weighted by squared distance to the nearest
    /// already-chosen centroid.
    fn seed_centroids(&self, x: &Matrix<f32>, rng: &mut StdRng) -> Matrix<f32> {
        let (n_samples, n_features) = x.shape();
        let mut centroids_data = Vec::with_capacity(self.n_clusters * n_features);

        let first_idx = rng.gen_range(0..n_samples);
        for j in 0..n_features {
            centroids_data.push(x.get(first_idx, j));
        }

        for _ in 1..self.n_clusters {
            let n_current = centroids_data.len() / n_features.max(1);
            let mut min_distances = vec![f32::INFINITY; n_samples];

            for (i, min_dist) in min_distances.iter_mut().enumerate() {
                for c in 0..n_current {
                    let mut dist_sq = 0.0;
                    for j in 0..n_features {
                        let diff = x.get(i, j) - centroids_data[c * n_features + j];
                        dist_sq += diff * diff;
                    }
                    if dist_sq < *min_dist {
                        *min_dist = dist_sq;
                    }
                }
            }

            let total: f32 = min_distances.iter().sum();
            let chosen = if total > 0.0 {
                // Roulette wheel: probability proportional to D².
                let target = rng.gen::<f32>() * total;
                let mut accumulated = 0.0;
                let mut idx = n_samples - 1;
                for (i, &dist) in min_distances.iter().enumerate() {
                    accumulated += dist;
                    if accumulated >= target {
                        idx = i;
                        break;
                    }
                }
                idx
            } else {
                // All remaining distances are zero (duplicate points).
                rng.gen_range(0..n_samples)
            };

            for j in 0..n_features {
                centroids_data.push(x.get(chosen, j));
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, centroids_data)
            .expect("internal error: centroid matrix creation failed")
    }

    /// Assigns each sample to the nearest centroid.
    fn assign_labels(&self, x: &Matrix<f32>, centroids: &Matrix<f32>) -> Vec<usize> {
        let n_samples = x.n_rows();
        let mut labels = vec![0; n_samples];

        for (i, label) in labels.iter_mut().enumerate() {
            let point = x.row(i);
            let mut min_dist = f32::INFINITY;
            let mut min_cluster = 0;

            for k in 0..self.n_clusters {
                let centroid = centroids.row(k);
                let dist = (&point - &centroid).norm_squared();
                if dist < min_dist {
                    min_dist = dist;
                    min_cluster = k;
                }
            }

            *label = min_cluster;
        }

        labels
    }

    /// Updates centroids as the mean of assigned samples.
    ///
    /// A cluster with no members keeps its previous centroid.
    fn update_centroids(
        &self,
        x: &Matrix<f32>,
        labels: &[usize],
        previous: &Matrix<f32>,
    ) -> Matrix<f32> {
        let (_, n_features) = x.shape();
        let mut sums = vec![0.0; self.n_clusters * n_features];
        let mut counts = vec![0usize; self.n_clusters];

        for (i, &label) in labels.iter().enumerate() {
            counts[label] += 1;
            for j in 0..n_features {
                sums[label * n_features + j] += x.get(i, j);
            }
        }

        for k in 0..self.n_clusters {
            for j in 0..n_features {
                if counts[k] > 0 {
                    sums[k * n_features + j] /= counts[k] as f32;
                } else {
                    sums[k * n_features + j] = previous.get(k, j);
                }
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, sums)
            .expect("internal error: centroid update failed")
    }
}

impl UnsupervisedEstimator for KMeans {
    type Labels = Vec<usize>;

    /// Fits the K-Means model to data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is empty, `n_clusters` is zero, or the
    /// data has fewer samples than clusters.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let n_samples = x.n_rows();

        if n_samples == 0 {
            return Err(SentirError::empty_input("cannot fit with zero samples"));
        }
        if self.n_clusters == 0 {
            return Err(SentirError::InvalidHyperparameter {
                param: "n_clusters".to_string(),
                value: "0".to_string(),
                constraint: ">0".to_string(),
            });
        }
        if n_samples < self.n_clusters {
            return Err(SentirError::Other(
                "number of samples must be >= number of clusters".to_string(),
            ));
        }

        let outcome = self.run(x);
        self.inertia = inertia(x, &outcome.centroids, &outcome.labels);
        self.n_iter = outcome.n_iter;
        self.labels = Some(outcome.labels);
        self.centroids = Some(outcome.centroids);

        Ok(())
    }

    /// Predicts cluster labels for new data.
    fn predict(&self, x: &Matrix<f32>) -> Vec<usize> {
        let centroids = self
            .centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.");

        self.assign_labels(x, centroids)
    }
}

/// Sum over all centroid coordinates of the absolute movement.
fn aggregate_movement(old: &Matrix<f32>, new: &Matrix<f32>) -> f32 {
    old.as_slice()
        .iter()
        .zip(new.as_slice().iter())
        .map(|(a, b)| (a - b).abs())
        .sum()
}

/// Qualitative cluster label from the dominant centroid intensity (first
/// feature dimension) and the cluster's relative size.
///
/// Cosmetic output; no downstream numeric effect.
fn describe_cluster(tone_value: f32, share: f32) -> String {
    let size_class = if share >= 0.35 {
        "Grupo Principal"
    } else {
        "Nicho"
    };
    let tone = if tone_value >= 0.5 {
        "Muito Positivo"
    } else if tone_value >= 0.1 {
        "Positivo"
    } else if tone_value > -0.1 {
        "Neutro"
    } else if tone_value > -0.5 {
        "Negativo"
    } else {
        "Muito Negativo"
    };
    format!("{size_class} {tone}")
}

/// Deterministic recommendation/satisfaction/churn heuristics.
///
/// Derived from the mean and standard deviation of a sentiment score sample;
/// these are fixed formulas, not learned models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictiveModels {
    pub recommendation_likelihood: f32,
    pub satisfaction_probability: f32,
    pub churn_probability: f32,
}

fn logistic(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Derives the three predictive heuristics from a score sample.
///
/// An empty sample yields all-zero probabilities.
///
/// # Examples
///
/// ```
/// use sentir::cluster::calculate_predictive_models;
///
/// let happy = calculate_predictive_models(&[0.8, 0.9, 0.7]);
/// let unhappy = calculate_predictive_models(&[-0.8, -0.9, -0.7]);
/// assert!(happy.satisfaction_probability > unhappy.satisfaction_probability);
/// assert!(happy.churn_probability < unhappy.churn_probability);
/// ```
#[must_use]
pub fn calculate_predictive_models(scores: &[f32]) -> PredictiveModels {
    if scores.is_empty() {
        return PredictiveModels::default();
    }

    let mean = stats::mean(scores);
    let std_dev = stats::std_dev(scores);

    PredictiveModels {
        recommendation_likelihood: logistic(4.0 * mean - 0.5 * std_dev),
        satisfaction_probability: (0.5 + 0.5 * mean - 0.25 * std_dev).clamp(0.0, 1.0),
        churn_probability: logistic(-4.0 * mean + 0.5 * std_dev - 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> Matrix<f32> {
        // Two well-separated clusters.
        Matrix::from_vec(
            6,
            2,
            vec![1.0, 2.0, 1.5, 1.8, 1.0, 0.6, 8.0, 8.0, 9.0, 11.0, 8.5, 9.0],
        )
        .expect("valid shape")
    }

    #[test]
    fn test_new() {
        let kmeans = KMeans::new(3);
        assert_eq!(kmeans.n_clusters, 3);
        assert!(!kmeans.is_fitted());
    }

    #[test]
    fn test_builder_options() {
        let kmeans = KMeans::new(2)
            .with_max_iter(10)
            .with_tolerance(1e-6)
            .with_random_state(42);
        assert_eq!(kmeans.max_iter, 10);
        assert!((kmeans.tol - 1e-6).abs() < 1e-10);
        assert_eq!(kmeans.random_state, Some(42));
    }

    #[test]
    fn test_cluster_empty_data() {
        let data = Matrix::from_vec(0, 2, vec![]).expect("valid shape");
        let result = KMeans::new(3).cluster(&data);
        assert!(!result.convergence_reached);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.silhouette_score, 0.0);
        assert!(result.clusters.is_empty());
        assert!(result.centroids.is_empty());
        assert!(result.cluster_labels.is_empty());
        assert_eq!(result.summary.total_points, 0);
    }

    #[test]
    fn test_cluster_zero_k() {
        let result = KMeans::new(0).cluster(&sample_data());
        assert!(!result.convergence_reached);
        assert!(result.clusters.is_empty());
    }

    #[test]
    fn test_cluster_sizes_sum_to_input() {
        let result = KMeans::new(2).with_random_state(42).cluster(&sample_data());
        let total: usize = result.summary.cluster_sizes.iter().sum();
        assert_eq!(total, 6);
        let grouped: usize = result.clusters.iter().map(Vec::len).sum();
        assert_eq!(grouped, 6);
    }

    #[test]
    fn test_centroid_len_is_k_times_dims() {
        let result = KMeans::new(2).with_random_state(42).cluster(&sample_data());
        assert_eq!(result.centroids.len(), 2 * 2);
        assert_eq!(result.summary.dimensions, 2);
    }

    #[test]
    fn test_silhouette_bounded_and_high_for_separated() {
        let result = KMeans::new(2).with_random_state(42).cluster(&sample_data());
        assert!((-1.0..=1.0).contains(&result.silhouette_score));
        assert!(result.silhouette_score > 0.5);
    }

    #[test]
    fn test_converges_on_separated_clusters() {
        let result = KMeans::new(2).with_random_state(42).cluster(&sample_data());
        assert!(result.convergence_reached);
        assert!(result.iterations <= 100);
    }

    #[test]
    fn test_one_label_per_cluster() {
        let result = KMeans::new(2).with_random_state(42).cluster(&sample_data());
        assert_eq!(result.cluster_labels.len(), 2);
        for label in &result.cluster_labels {
            assert!(
                label.starts_with("Grupo Principal") || label.starts_with("Nicho"),
                "unexpected label {label}"
            );
        }
    }

    #[test]
    fn test_reproducible_with_seed() {
        let a = KMeans::new(2).with_random_state(7).cluster(&sample_data());
        let b = KMeans::new(2).with_random_state(7).cluster(&sample_data());
        assert_eq!(a.centroids, b.centroids);
        assert_eq!(a.summary.cluster_sizes, b.summary.cluster_sizes);
    }

    #[test]
    fn test_identical_points_collapse() {
        let data = Matrix::from_vec(5, 2, vec![1.0; 10]).expect("valid shape");
        let result = KMeans::new(2).with_random_state(42).cluster(&data);
        let total: usize = result.summary.cluster_sizes.iter().sum();
        assert_eq!(total, 5);
        // All points land in one cluster; the other keeps its seed centroid.
        assert!(result.summary.cluster_sizes.contains(&5));
        assert!(result.convergence_reached);
    }

    #[test]
    fn test_single_cluster() {
        let result = KMeans::new(1).with_random_state(42).cluster(&sample_data());
        assert_eq!(result.summary.cluster_sizes, vec![6]);
        assert_eq!(result.silhouette_score, 0.0);
    }

    #[test]
    fn test_max_iter_cap() {
        let result = KMeans::new(2)
            .with_max_iter(1)
            .with_random_state(42)
            .cluster(&sample_data());
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_fit_predict_roundtrip() {
        let data = sample_data();
        let mut kmeans = KMeans::new(2).with_random_state(42);
        kmeans.fit(&data).expect("fit succeeds");

        assert!(kmeans.is_fitted());
        assert!(kmeans.inertia() >= 0.0);
        assert!(kmeans.n_iter() >= 1);

        let labels = kmeans.predict(&data);
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_fit_empty_data_errors() {
        let data = Matrix::from_vec(0, 2, vec![]).expect("valid shape");
        let mut kmeans = KMeans::new(2);
        assert!(kmeans.fit(&data).is_err());
    }

    #[test]
    fn test_fit_too_many_clusters_errors() {
        let data = Matrix::from_vec(3, 2, vec![1.0; 6]).expect("valid shape");
        let mut kmeans = KMeans::new(5);
        assert!(kmeans.fit(&data).is_err());
    }

    #[test]
    fn test_fit_zero_clusters_errors() {
        let mut kmeans = KMeans::new(0);
        assert!(kmeans.fit(&sample_data()).is_err());
    }

    #[test]
    fn test_describe_cluster_labels() {
        assert_eq!(describe_cluster(0.8, 0.5), "Grupo Principal Muito Positivo");
        assert_eq!(describe_cluster(0.2, 0.5), "Grupo Principal Positivo");
        assert_eq!(describe_cluster(0.0, 0.5), "Grupo Principal Neutro");
        assert_eq!(describe_cluster(-0.2, 0.1), "Nicho Negativo");
        assert_eq!(describe_cluster(-0.8, 0.1), "Nicho Muito Negativo");
    }

    #[test]
    fn test_predictive_models_empty() {
        let models = calculate_predictive_models(&[]);
        assert_eq!(models, PredictiveModels::default());
    }

    #[test]
    fn test_predictive_models_monotone_in_mean() {
        let happy = calculate_predictive_models(&[0.8, 0.9, 0.7]);
        let neutral = calculate_predictive_models(&[0.0, 0.0, 0.0]);
        let unhappy = calculate_predictive_models(&[-0.8, -0.9, -0.7]);

        assert!(happy.recommendation_likelihood > neutral.recommendation_likelihood);
        assert!(neutral.recommendation_likelihood > unhappy.recommendation_likelihood);
        assert!(happy.satisfaction_probability > unhappy.satisfaction_probability);
        assert!(happy.churn_probability < unhappy.churn_probability);
    }

    #[test]
    fn test_predictive_models_bounded() {
        for scores in [
            vec![1.0; 10],
            vec![-1.0; 10],
            vec![0.5, -0.5, 0.9, -0.9],
        ] {
            let models = calculate_predictive_models(&scores);
            for p in [
                models.recommendation_likelihood,
                models.satisfaction_probability,
                models.churn_probability,
            ] {
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_volatility_dampens_satisfaction() {
        let steady = calculate_predictive_models(&[0.5, 0.5, 0.5, 0.5]);
        let volatile = calculate_predictive_models(&[1.0, 0.0, 1.0, 0.0]);
        assert!(steady.satisfaction_probability > volatile.satisfaction_probability);
    }
}
