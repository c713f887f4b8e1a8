//! K-means++ clustering over dense real-valued points.
//!
//! Points are seeded with the k-means++ weighting scheme and refined with
//! Lloyd's algorithm until every centroid stops moving (within epsilon)
//! or the iteration cap is reached.
//!
//! ## Pipeline
//!
//! 1. **Load** — [`Source`] reads a single stream or inner-joins two keyed files
//! 2. **Seed** — [`seed`] draws k centroids, weighted by squared distance
//! 3. **Assign** — [`assign`] labels each point with its nearest centroid
//! 4. **Update** — [`update`] moves each centroid to the mean of its points
//! 5. **Converge** — [`has_converged`] compares consecutive centroid sets
//!
//! ## Core Types
//!
//! - [`Vector`] — A single d-dimensional point or centroid
//! - [`VectorSet`] — The immutable, dimension-checked dataset
//! - [`Assignment`] — Point → cluster labels for one iteration
//! - [`Accumulator`] — Running sum and count for one cluster
//! - [`Driver`] — Seeding → Iterating → Converged | MaxIterationsReached
//! - [`Clustering`] — Final centroids plus run statistics
//!
//! ## Randomness
//!
//! - [`Sampler`] — Injectable "draw weighted index" capability, implemented
//!   for every [`rand::Rng`] and seeded from [`Config`] by default
mod accumulator;
mod assignment;
mod config;
mod convergence;
mod distance;
mod driver;
mod error;
mod loader;
mod points;
mod sampler;
mod seeder;
mod update;
mod vector;

#[cfg(feature = "cli")]
mod cli;

pub use accumulator::*;
pub use assignment::*;
pub use config::*;
pub use convergence::*;
pub use distance::*;
pub use driver::*;
pub use error::*;
pub use loader::*;
pub use points::*;
pub use sampler::*;
pub use seeder::*;
pub use update::*;
pub use vector::*;

#[cfg(feature = "cli")]
pub use cli::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coordinates, distances, movements, and convergence thresholds.
pub type Energy = f64;

// ============================================================================
// K-MEANS PARAMETERS
// ============================================================================
/// Seed for the default random source, so repeated runs pick the same centroids.
pub const KMEANS_SEED: u64 = 1000;
/// Lloyd iterations when none are requested.
pub const KMEANS_ITERATIONS: usize = 300;
/// Convergence threshold when none is requested on the command line.
pub const KMEANS_EPSILON: Energy = 0.001;
/// Exclusive upper bound on requested Lloyd iterations.
pub const KMEANS_ITERATIONS_MAX: usize = 1000;
/// Decimal places used when printing centroids.
pub const KMEANS_PRECISION: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so stdout stays reserved for centroids.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
