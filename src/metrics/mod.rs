//! Clustering quality metrics.
//!
//! Includes inertia (within-cluster sum of squares) and the silhouette
//! score used to grade a segmentation.

use crate::primitives::Matrix;

/// Computes the inertia (within-cluster sum of squared distances).
///
/// # Examples
///
/// ```
/// use sentir::metrics::inertia;
/// use sentir::primitives::Matrix;
///
/// let data = Matrix::from_vec(2, 2, vec![0.0, 0.0, 1.0, 0.0]).expect("valid shape");
/// let centroids = Matrix::from_vec(1, 2, vec![0.5, 0.0]).expect("valid shape");
/// let labels = vec![0, 0];
/// assert!((inertia(&data, &centroids, &labels) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn inertia(data: &Matrix<f32>, centroids: &Matrix<f32>, labels: &[usize]) -> f32 {
    labels
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let point = data.row(i);
            let centroid = centroids.row(label);
            (&point - &centroid).norm_squared()
        })
        .sum()
}

/// Mean distance from a point to the other members of one cluster.
///
/// Returns `None` when the cluster has no other members.
fn mean_distance_to_cluster(
    data: &Matrix<f32>,
    point_idx: usize,
    cluster: usize,
    labels: &[usize],
) -> Option<f32> {
    let point = data.row(point_idx);
    let distances: Vec<f32> = labels
        .iter()
        .enumerate()
        .filter(|&(j, &label)| j != point_idx && label == cluster)
        .map(|(j, _)| {
            let other = data.row(j);
            (&point - &other).norm()
        })
        .collect();

    if distances.is_empty() {
        None
    } else {
        Some(distances.iter().sum::<f32>() / distances.len() as f32)
    }
}

/// Computes the silhouette score for a clustering.
///
/// For each point, `a` is the mean distance to its own cluster's other
/// members and `b` the minimum over other clusters of the mean distance to
/// that cluster; the per-point silhouette is `(b - a) / max(a, b)`. Points
/// whose cluster has no other members are skipped, and the overall score is
/// the mean over valid points (0.0 if none are valid).
///
/// Values range from -1 to 1; higher means tighter, better-separated
/// clusters.
///
/// # Examples
///
/// ```
/// use sentir::metrics::silhouette_score;
/// use sentir::primitives::Matrix;
///
/// let data = Matrix::from_vec(4, 2, vec![
///     0.0, 0.0,
///     0.1, 0.1,
///     5.0, 5.0,
///     5.1, 5.1,
/// ]).expect("valid shape");
/// let labels = vec![0, 0, 1, 1];
/// assert!(silhouette_score(&data, &labels) > 0.5);
/// ```
#[must_use]
pub fn silhouette_score(data: &Matrix<f32>, labels: &[usize]) -> f32 {
    let n_samples = data.n_rows();
    if n_samples < 2 {
        return 0.0;
    }

    let n_clusters = labels.iter().max().map_or(0, |&m| m + 1);
    if n_clusters < 2 {
        return 0.0;
    }

    let mut total = 0.0f32;
    let mut valid = 0usize;

    for i in 0..n_samples {
        let cluster = labels[i];
        let Some(a) = mean_distance_to_cluster(data, i, cluster, labels) else {
            continue;
        };

        let b = (0..n_clusters)
            .filter(|&other| other != cluster)
            .filter_map(|other| mean_distance_to_cluster(data, i, other, labels))
            .fold(f32::INFINITY, f32::min);
        if b == f32::INFINITY {
            continue;
        }

        let max_ab = a.max(b);
        if max_ab > 0.0 {
            total += (b - a) / max_ab;
        }
        valid += 1;
    }

    if valid == 0 {
        0.0
    } else {
        total / valid as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separated_data() -> (Matrix<f32>, Vec<usize>) {
        let data = Matrix::from_vec(
            6,
            2,
            vec![0.0, 0.0, 0.1, 0.1, 0.2, 0.0, 5.0, 5.0, 5.1, 5.1, 5.0, 5.2],
        )
        .expect("valid shape");
        let labels = vec![0, 0, 0, 1, 1, 1];
        (data, labels)
    }

    #[test]
    fn test_inertia_zero_for_points_on_centroids() {
        let data = Matrix::from_vec(2, 2, vec![1.0, 1.0, 3.0, 3.0]).expect("valid shape");
        let centroids = Matrix::from_vec(2, 2, vec![1.0, 1.0, 3.0, 3.0]).expect("valid shape");
        let labels = vec![0, 1];
        assert!(inertia(&data, &centroids, &labels) < 1e-9);
    }

    #[test]
    fn test_inertia_accumulates_squared_distances() {
        let data = Matrix::from_vec(2, 1, vec![0.0, 2.0]).expect("valid shape");
        let centroids = Matrix::from_vec(1, 1, vec![1.0]).expect("valid shape");
        let labels = vec![0, 0];
        assert!((inertia(&data, &centroids, &labels) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_silhouette_high_for_separated_clusters() {
        let (data, labels) = separated_data();
        let score = silhouette_score(&data, &labels);
        assert!(score > 0.8, "expected high silhouette, got {score}");
    }

    #[test]
    fn test_silhouette_bounded() {
        let (data, labels) = separated_data();
        let score = silhouette_score(&data, &labels);
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_silhouette_zero_for_single_cluster() {
        let data = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid shape");
        let labels = vec![0, 0, 0];
        assert_eq!(silhouette_score(&data, &labels), 0.0);
    }

    #[test]
    fn test_silhouette_zero_for_single_point() {
        let data = Matrix::from_vec(1, 1, vec![1.0]).expect("valid shape");
        assert_eq!(silhouette_score(&data, &[0]), 0.0);
    }

    #[test]
    fn test_silhouette_skips_singleton_clusters() {
        // Cluster 1 has a single member; only cluster 0's points are valid.
        let data =
            Matrix::from_vec(3, 1, vec![0.0, 0.2, 9.0]).expect("valid shape");
        let labels = vec![0, 0, 1];
        let score = silhouette_score(&data, &labels);
        assert!(score > 0.9);
    }
}
