use crate::*;

/// Point → cluster labels for one Lloyd iteration.
///
/// Covers every point index exactly once. Rebuilt from scratch each
/// iteration; a cluster may end up with no points.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    pub fn labels(&self) -> &[usize] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Number of points carrying each label in `0..k`.
    pub fn populations(&self, k: usize) -> Vec<usize> {
        let mut counts = vec![0; k];
        self.0.iter().for_each(|&j| counts[j] += 1);
        counts
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(labels: Vec<usize>) -> Self {
        Self(labels)
    }
}

/// Index and squared distance of the nearest centroid.
/// Exact ties resolve to the lowest index.
pub fn neighbor(x: &Vector, centroids: &[Vector]) -> (usize, Energy) {
    centroids
        .iter()
        .enumerate()
        .map(|(j, c)| (j, squared_distance(c, x)))
        .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2))
        .expect("at least one centroid")
}

/// Labels every point with its nearest centroid.
pub fn assign(points: &VectorSet, centroids: &[Vector]) -> Assignment {
    points
        .iter()
        .map(|x| neighbor(x, centroids).0)
        .collect::<Vec<usize>>()
        .into()
}

/// Within-cluster sum of squares: the Lloyd objective for a labelling.
pub fn inertia(points: &VectorSet, centroids: &[Vector], assignment: &Assignment) -> Energy {
    assert_eq!(points.n(), assignment.len(), "assignment length mismatch");
    points
        .iter()
        .zip(assignment.labels())
        .map(|(x, &j)| squared_distance(x, &centroids[j]))
        .sum()
}
