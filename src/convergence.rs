use crate::*;

/// How far each centroid moved between two iterations.
pub fn drift(prev: &[Vector], curr: &[Vector]) -> Vec<Energy> {
    assert_eq!(prev.len(), curr.len(), "centroid count mismatch");
    prev.iter().zip(curr).map(|(a, b)| distance(a, b)).collect()
}

/// True when every centroid moved strictly less than `epsilon`.
///
/// A centroid that did not move at all always counts as converged, so
/// identical centroid sets converge for any `epsilon >= 0`, and
/// `epsilon == 0` means exact equality.
pub fn has_converged(prev: &[Vector], curr: &[Vector], epsilon: Energy) -> bool {
    drift(prev, curr)
        .into_iter()
        .all(|movement| movement == 0. || movement < epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn identical_sets_converge_for_any_epsilon() {
        let centroids = blobs(2, 5, 3).points().to_vec();
        for epsilon in [0., 1e-12, 0.001, 1., 1e9] {
            assert!(has_converged(&centroids, &centroids, epsilon));
        }
    }

    #[test]
    fn zero_epsilon_rejects_near_equal() {
        let prev = vec![Vector::from(vec![0., 0.5])];
        let curr = vec![Vector::from(vec![0., 0.5 + 1e-12])];
        assert!(!has_converged(&prev, &curr, 0.));
    }

    #[test]
    fn strictly_less_than_epsilon() {
        let prev = vec![Vector::from(vec![0.]), Vector::from(vec![5.])];
        let curr = vec![Vector::from(vec![0.5]), Vector::from(vec![5.])];
        assert!(!has_converged(&prev, &curr, 0.5));
        assert!(has_converged(&prev, &curr, 0.5000001));
    }

    #[test]
    fn any_mover_blocks_convergence() {
        let prev = vec![Vector::from(vec![0.]), Vector::from(vec![5.])];
        let curr = vec![Vector::from(vec![0.]), Vector::from(vec![6.])];
        assert!(!has_converged(&prev, &curr, 0.9));
        assert_eq!(drift(&prev, &curr), vec![0., 1.]);
    }
}
