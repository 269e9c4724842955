use std::time::Duration;
use thiserror::Error;

/// Errors raised while waiting for a dependent service to come up.
///
/// Connection-level failures before the deadline are consumed by the
/// retry loop and never surface here; the same failure class after the
/// deadline is fatal and carried as the `source` of `DeadlineExceeded`.
#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("Invalid readiness configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Service at {url} still unreachable after {elapsed:?}: {source}")]
    DeadlineExceeded {
        url: String,
        elapsed: Duration,
        #[source]
        source: reqwest::Error,
    },
}
