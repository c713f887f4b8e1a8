use crate::*;

/// Running sum and count of the points absorbed into one cluster.
///
/// Built fresh for every update step and dropped right after, once
/// [`Accumulator::mean`] has produced the new centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    sum: Vec<Energy>,
    n: usize,
}

impl Accumulator {
    /// The identity: nothing absorbed yet.
    pub fn empty(d: usize) -> Self {
        Self {
            sum: vec![0.; d],
            n: 0,
        }
    }
    /// Number of points absorbed.
    pub fn n(&self) -> usize {
        self.n
    }
    /// Adds one point's coordinates to the running sum.
    pub fn absorb(&mut self, x: &Vector) {
        assert_eq!(self.sum.len(), x.dimension(), "dimension mismatch");
        self.sum
            .iter_mut()
            .zip(x.iter())
            .for_each(|(s, v)| *s += v);
        self.n += 1;
    }
    /// Per-coordinate mean, or `None` for a cluster that absorbed nothing.
    pub fn mean(&self) -> Option<Vector> {
        match self.n {
            0 => None,
            n => Some(Vector::from(
                self.sum.iter().map(|s| s / n as Energy).collect::<Vec<_>>(),
            )),
        }
    }
}
