use crate::*;
use std::path::PathBuf;

/// Where the points come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Comma-separated points on stdin, one per line.
    Stream,
    /// Comma-separated points in a file, one per line.
    File(PathBuf),
    /// Two `key,values...` files, inner-joined on the integer key.
    Join(PathBuf, PathBuf),
}

/// Everything a run needs, passed explicitly into [`Driver::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    k: usize,
    iterations: usize,
    epsilon: Energy,
    seed: u64,
    source: Source,
}

impl Config {
    /// Defaults to [`KMEANS_ITERATIONS`], exact convergence, and [`KMEANS_SEED`].
    pub fn new(k: usize, source: Source) -> Self {
        Self {
            k,
            iterations: KMEANS_ITERATIONS,
            epsilon: 0.,
            seed: KMEANS_SEED,
            source,
        }
    }
    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
    pub fn with_epsilon(self, epsilon: Energy) -> Self {
        Self { epsilon, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.k
    }
    /// Cap on Lloyd iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// Convergence threshold on centroid movement.
    pub fn epsilon(&self) -> Energy {
        self.epsilon
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Checks the scalars against a dataset of `n` points:
    /// `1 < k < n`, `1 < iterations < 1000`, finite `epsilon >= 0`.
    pub fn validate(&self, n: usize) -> Result<(), Error> {
        if !(1 < self.k && self.k < n) {
            return Err(Error::Clusters);
        }
        if !(1 < self.iterations && self.iterations < KMEANS_ITERATIONS_MAX) {
            return Err(Error::Iterations);
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.) {
            return Err(Error::Epsilon);
        }
        Ok(())
    }
}
