use crate::*;

/// Source of randomness for seeding.
///
/// The only capability the core needs is "draw an index with probability
/// proportional to its weight". Any [`rand::Rng`] provides it; tests can
/// script the draws instead.
pub trait Sampler {
    /// Draws an index into `weights`. Callers pass non-empty, finite,
    /// non-negative weights with a positive sum.
    fn draw(&mut self, weights: &[Energy]) -> usize;
}

impl<R> Sampler for R
where
    R: rand::Rng,
{
    fn draw(&mut self, weights: &[Energy]) -> usize {
        use rand::distr::Distribution;
        use rand::distr::weighted::WeightedIndex;
        WeightedIndex::new(weights.iter())
            .expect("valid weights array")
            .sample(self)
    }
}
