use crate::*;

/// Moves each centroid to the mean of the points assigned to it.
///
/// One pass over the points folds them into per-cluster [`Accumulator`]s.
/// A cluster that received no points keeps its `previous` centroid.
pub fn update(points: &VectorSet, assignment: &Assignment, previous: &[Vector]) -> Vec<Vector> {
    assert_eq!(points.n(), assignment.len(), "assignment length mismatch");
    let mut accumulators = vec![Accumulator::empty(points.d()); previous.len()];
    points
        .iter()
        .zip(assignment.labels())
        .for_each(|(x, &j)| accumulators[j].absorb(x));
    accumulators
        .iter()
        .zip(previous)
        .enumerate()
        .map(|(j, (acc, old))| {
            acc.mean().unwrap_or_else(|| {
                log::debug!("{:<32}{:<32}", "empty cluster retained", j);
                old.clone()
            })
        })
        .collect()
}
