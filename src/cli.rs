//! Command-line surface of the `kmeans` binary.
//!
//! ```text
//! kmeans K [ITER] [--epsilon EPS]  points on stdin (or --file)
//! kmeans K [ITER] EPS LEFT RIGHT    two keyed files, inner-joined
//! ```
use crate::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kmeans", version, about = "K-means++ clustering of comma-separated points", long_about = None)]
pub struct Args {
    /// K [ITER], or K [ITER] EPS LEFT RIGHT
    #[arg(required = true, num_args = 1..=5, allow_negative_numbers = true, value_name = "ARGS")]
    positional: Vec<String>,
    /// Convergence threshold for stdin and --file runs [default: 0.001]
    #[arg(long, allow_negative_numbers = true)]
    epsilon: Option<String>,
    /// Seed for the k-means++ random source.
    #[arg(long, default_value_t = KMEANS_SEED)]
    seed: u64,
    /// Read points from a file instead of stdin.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Print a JSON summary instead of centroid lines.
    #[arg(long)]
    json: bool,
    /// Log each iteration to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Accepts `3`, `03`, ` 3 `, and `3.0`; rejects `3.4` and `abc`.
pub fn integer(s: &str) -> Option<i64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite() && x.fract() == 0.)
        .map(|x| x as i64)
}

impl Args {
    pub fn json(&self) -> bool {
        self.json
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }

    /// Builds a [`Config`] from the positional arguments.
    ///
    /// With no files, a second argument is the iteration cap and epsilon
    /// comes from `--epsilon`.
    ///
    /// Checks everything that does not depend on the data: `k > 1`,
    /// `1 < iter < 1000`, `eps >= 0`. The `k < n` half is left to
    /// [`Config::validate`] once the points are loaded.
    pub fn config(&self) -> Result<Config, Error> {
        let args = self.positional.iter().map(String::as_str).collect::<Vec<_>>();
        let (k, iter, eps, files) = match (args.as_slice(), &self.epsilon) {
            ([k], eps) => (k, None, eps.as_deref(), None),
            ([k, iter], eps) => (k, Some(iter), eps.as_deref(), None),
            ([k, eps, l, r], None) => (k, None, Some(*eps), Some((l, r))),
            ([k, iter, eps, l, r], None) => (k, Some(iter), Some(*eps), Some((l, r))),
            ([_, _, _, _] | [_, _, _, _, _], Some(_)) => {
                return Err(Error::Malformed("--epsilon conflicts with joined inputs".into()));
            }
            _ => return Err(Error::Malformed("expected K [ITER] or K [ITER] EPS LEFT RIGHT".into())),
        };
        let k = integer(k)
            .filter(|k| *k > 1)
            .ok_or(Error::Clusters)? as usize;
        let iterations = match iter {
            None => KMEANS_ITERATIONS,
            Some(iter) => integer(iter)
                .filter(|i| 1 < *i && *i < KMEANS_ITERATIONS_MAX as i64)
                .ok_or(Error::Iterations)? as usize,
        };
        let epsilon = match eps {
            None => KMEANS_EPSILON,
            Some(eps) => eps
                .trim()
                .parse::<Energy>()
                .ok()
                .filter(|e| e.is_finite() && *e >= 0.)
                .ok_or(Error::Epsilon)?,
        };
        let source = match (files, &self.file) {
            (Some(_), Some(_)) => {
                return Err(Error::Malformed("--file conflicts with joined inputs".into()));
            }
            (Some((l, r)), None) => Source::Join(PathBuf::from(l), PathBuf::from(r)),
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => Source::Stream,
        };
        Ok(Config::new(k, source)
            .with_iterations(iterations)
            .with_epsilon(epsilon)
            .with_seed(self.seed))
    }
}

/// Loads, validates, clusters. Everything the binary does short of printing.
pub fn execute(config: Config) -> Result<Clustering, Error> {
    let points = config.source().load()?;
    config.validate(points.n())?;
    Ok(Driver::new(config).run(&points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kmeans").chain(argv.iter().copied()))
            .expect("parsable arguments")
    }

    #[test]
    fn integer_like() {
        assert_eq!(integer("3"), Some(3));
        assert_eq!(integer("03"), Some(3));
        assert_eq!(integer(" 3.0 "), Some(3));
        assert_eq!(integer("3.4"), None);
        assert_eq!(integer("abc"), None);
        assert_eq!(integer(""), None);
    }

    #[test]
    fn stdin_forms() {
        let config = args(&["3"]).config().unwrap();
        assert_eq!(config.k(), 3);
        assert_eq!(config.iterations(), KMEANS_ITERATIONS);
        assert_eq!(config.epsilon(), KMEANS_EPSILON);
        assert_eq!(config.source(), &Source::Stream);
        let config = args(&["3", "100"]).config().unwrap();
        assert_eq!(config.iterations(), 100);
        assert_eq!(config.epsilon(), KMEANS_EPSILON);
        let config = args(&["3", "100", "--epsilon", "0"]).config().unwrap();
        assert_eq!(config.iterations(), 100);
        assert_eq!(config.epsilon(), 0.);
    }

    #[test]
    fn three_positionals_rejected() {
        assert!(matches!(args(&["3", "100", "0"]).config(), Err(Error::Malformed(_))));
    }

    #[test]
    fn joined_forms() {
        let config = args(&["3", "0", "a.txt", "b.txt"]).config().unwrap();
        assert_eq!(config.source(), &Source::Join("a.txt".into(), "b.txt".into()));
        assert_eq!(config.epsilon(), 0.);
        assert_eq!(config.iterations(), KMEANS_ITERATIONS);
        let config = args(&["3.0", "50", "0.5", "a.txt", "b.txt"]).config().unwrap();
        assert_eq!(config.k(), 3);
        assert_eq!(config.iterations(), 50);
        assert_eq!(config.epsilon(), 0.5);
        let both = args(&["3", "0", "a.txt", "b.txt", "--epsilon", "0.1"]).config();
        assert!(matches!(both, Err(Error::Malformed(_))));
    }

    #[test]
    fn file_and_seed_options() {
        let config = args(&["--seed", "7", "--file", "p.txt", "2"]).config().unwrap();
        assert_eq!(config.seed(), 7);
        assert_eq!(config.source(), &Source::File("p.txt".into()));
        assert_eq!(args(&["2"]).config().unwrap().seed(), KMEANS_SEED);
    }

    #[test]
    fn bad_clusters() {
        assert!(matches!(args(&["1"]).config(), Err(Error::Clusters)));
        assert!(matches!(args(&["2.5", "10"]).config(), Err(Error::Clusters)));
        assert!(matches!(args(&["x", "0", "a.txt", "b.txt"]).config(), Err(Error::Clusters)));
    }

    #[test]
    fn bad_iterations() {
        assert!(matches!(args(&["3", "1"]).config(), Err(Error::Iterations)));
        assert!(matches!(args(&["3", "1000"]).config(), Err(Error::Iterations)));
        assert!(matches!(args(&["3", "9.5"]).config(), Err(Error::Iterations)));
        assert!(matches!(args(&["3", "0.001"]).config(), Err(Error::Iterations)));
    }

    #[test]
    fn bad_epsilon() {
        assert!(matches!(args(&["3", "--epsilon", "-0.5"]).config(), Err(Error::Epsilon)));
        assert!(matches!(args(&["3", "--epsilon", "eps"]).config(), Err(Error::Epsilon)));
        assert!(matches!(args(&["3", "-0.5", "a.txt", "b.txt"]).config(), Err(Error::Epsilon)));
    }

    #[test]
    fn k_must_be_below_n() {
        let dir = std::env::temp_dir().join(format!("kmeans-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("points.txt");
        std::fs::write(&path, "0,0\n0,1\n10,0\n10,1\n").unwrap();
        let file = path.to_str().unwrap();
        let too_many = args(&["--file", file, "4"]).config().unwrap();
        assert!(matches!(execute(too_many), Err(Error::Clusters)));
        let fine = args(&["--file", file, "2", "--epsilon", "0"]).config().unwrap();
        let result = execute(fine).unwrap();
        assert_eq!(result.centroids().len(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn joined_files_end_to_end() {
        let dir = std::env::temp_dir().join(format!("kmeans-join-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let left = dir.join("left.txt");
        let right = dir.join("right.txt");
        std::fs::write(&left, "1.0000,0\n2.0000,0\n3.0000,10\n4.0000,10\n5.0000,99\n").unwrap();
        std::fs::write(&right, "4,1\n3,0\n2,1\n1,0\n").unwrap();
        let argv = ["2", "300", "0", left.to_str().unwrap(), right.to_str().unwrap()];
        let config = args(&argv).config().unwrap();
        let ref mut sampler = crate::tests::Scripted::from(vec![0, 3]);
        let points = config.source().load().unwrap();
        assert_eq!(points.n(), 4);
        config.validate(points.n()).unwrap();
        let result = Driver::new(config).run_with(&points, sampler);
        assert_eq!(result.to_string(), "0.0000,0.5000\n10.0000,0.5000\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
