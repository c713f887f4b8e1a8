use crate::*;

/// Sum of squared per-coordinate differences.
///
/// # Panics
///
/// If the dimensions differ. A well-formed [`VectorSet`] and the centroids
/// derived from it always agree, so a mismatch is a programming error.
pub fn squared_distance(a: &Vector, b: &Vector) -> Energy {
    assert_eq!(a.dimension(), b.dimension(), "dimension mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x - y)
        .map(|delta| delta * delta)
        .sum()
}

/// Euclidean distance, used for centroid movement.
pub fn distance(a: &Vector, b: &Vector) -> Energy {
    squared_distance(a, b).sqrt()
}
