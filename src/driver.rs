use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Lifecycle of a single clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Seeding,
    Iterating,
    /// Every centroid moved less than epsilon.
    Converged,
    /// Hit the iteration cap first; centroids are best-effort.
    MaxIterationsReached,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Converged | Self::MaxIterationsReached)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Seeding => write!(f, "seeding"),
            Self::Iterating => write!(f, "iterating"),
            Self::Converged => write!(f, "converged"),
            Self::MaxIterationsReached => write!(f, "max iterations reached"),
        }
    }
}

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Clustering {
    centroids: Vec<Vector>,
    assignment: Assignment,
    inertia: Vec<Energy>,
    iterations: usize,
    state: State,
}

impl Clustering {
    /// Final centroids, indexed by cluster.
    pub fn centroids(&self) -> &[Vector] {
        &self.centroids
    }
    /// Labels that produced the final centroids.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
    /// Lloyd objective of each iteration's labelling, in order.
    pub fn inertia(&self) -> &[Energy] {
        &self.inertia
    }
    /// Number of Lloyd iterations run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn state(&self) -> State {
        self.state
    }
}

/// One centroid per line.
impl std::fmt::Display for Clustering {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.centroids
            .iter()
            .try_for_each(|centroid| writeln!(f, "{}", centroid))
    }
}

/// Seeds with k-means++ and then runs Lloyd iterations.
///
/// ```text
/// Seeding → Iterating ─┬→ Converged
///              ↑       ├→ MaxIterationsReached
///              └───────┘
/// ```
///
/// The first iteration compares against the seeded centroids themselves.
pub struct Driver {
    config: Config,
}

impl Driver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs with a [`SmallRng`] seeded from the config.
    pub fn run(&self, points: &VectorSet) -> Clustering {
        let ref mut rng = SmallRng::seed_from_u64(self.config.seed());
        self.run_with(points, rng)
    }

    /// Runs with any random source.
    ///
    /// # Panics
    ///
    /// If `k` is zero or exceeds the number of points. [`Config::validate`]
    /// rules both out.
    pub fn run_with<S>(&self, points: &VectorSet, sampler: &mut S) -> Clustering
    where
        S: Sampler + ?Sized,
    {
        let k = self.config.k();
        let epsilon = self.config.epsilon();
        let cap = self.config.iterations();
        log::info!("{:<32}{:<32}", "kmeans points", format!("{}x{}", points.n(), points.d()));
        log::info!("{:<32}{:<32}", format!("kmeans {}", State::Seeding), k);
        let mut kmeans = seed(points, k, sampler);
        let mut labels = Assignment::default();
        let mut losses = Vec::new();
        let mut state = State::Iterating;
        let mut t = 0;
        while state == State::Iterating {
            t += 1;
            labels = assign(points, &kmeans);
            losses.push(inertia(points, &kmeans, &labels));
            let next = update(points, &labels, &kmeans);
            let done = has_converged(&kmeans, &next, epsilon);
            let moved = drift(&kmeans, &next)
                .into_iter()
                .fold(0., Energy::max);
            log::debug!("{:3} inertia {:.6} drift {:.6}", t, losses[t - 1], moved);
            kmeans = next;
            state = match (done, t >= cap) {
                (true, _) => State::Converged,
                (false, true) => State::MaxIterationsReached,
                (false, false) => State::Iterating,
            };
        }
        log::info!("{:<32}{:<32}", format!("kmeans {}", state), t);
        Clustering {
            centroids: kmeans,
            assignment: labels,
            inertia: losses,
            iterations: t,
            state,
        }
    }
}
