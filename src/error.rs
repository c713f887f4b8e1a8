/// Every way a run can fail before the clustering core is invoked.
///
/// The `Display` strings are the exact user-facing messages. Data problems
/// (`EmptyDataset`, `Malformed`, `Io`) share one generic message; their
/// details are only logged.
///
/// Dimension mismatches inside the core are not represented here: they
/// are invariant violations and panic.
#[derive(Debug)]
pub enum Error {
    /// k is not integer-like, or not in `1 < k < n`.
    Clusters,
    /// Iteration cap is not integer-like, or not in `1 < iter < 1000`.
    Iterations,
    /// Epsilon is not a number, or is negative.
    Epsilon,
    /// Nothing left after loading (or joining).
    EmptyDataset,
    /// Unparsable field, ragged rows, or inconsistent arguments.
    Malformed(String),
    /// An input could not be opened or read.
    Io(std::io::Error),
}

impl Error {
    /// Diagnostic detail that is kept out of the user-facing message.
    pub fn detail(&self) -> String {
        match self {
            Self::Malformed(reason) => reason.clone(),
            Self::Io(e) => e.to_string(),
            Self::EmptyDataset => "no points after loading".into(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Clusters => write!(f, "Incorrect number of clusters!"),
            Self::Iterations => write!(f, "Incorrect maximum iteration!"),
            Self::Epsilon => write!(f, "Invalid epsilon!"),
            Self::EmptyDataset | Self::Malformed(_) | Self::Io(_) => {
                write!(f, "An Error Has Occurred")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::Clusters.to_string(), "Incorrect number of clusters!");
        assert_eq!(Error::Iterations.to_string(), "Incorrect maximum iteration!");
        assert_eq!(Error::Epsilon.to_string(), "Invalid epsilon!");
        assert_eq!(Error::EmptyDataset.to_string(), "An Error Has Occurred");
        assert_eq!(
            Error::Malformed("x".into()).to_string(),
            "An Error Has Occurred"
        );
    }

    #[test]
    fn detail_is_kept_for_logs() {
        let e = Error::Malformed("line 3: `abc` is not a number".into());
        assert_eq!(e.detail(), "line 3: `abc` is not a number");
    }
}
