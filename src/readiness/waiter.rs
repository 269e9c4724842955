use crate::config::ReadinessConfig;
use crate::error::ReadinessError;
use std::time::{Duration, Instant};

/// Retry callback type, invoked after each failed probe with the attempt
/// count and the elapsed wall-clock time
pub type RetryHandler = Box<dyn Fn(u32, Duration) + Send + Sync>;

/// Polls an HTTP endpoint until it accepts a connection and responds.
///
/// Any response counts as ready, error statuses included; only
/// connection-level and timeout failures keep the loop running. The loop
/// is a fixed-interval retry bounded by the configured deadline, with no
/// backoff and no jitter.
pub struct ReadinessWaiter {
    config: ReadinessConfig,
    client: reqwest::Client,
}

impl ReadinessWaiter {
    /// Create a waiter for the given configuration.
    ///
    /// The per-attempt timeout is baked into the HTTP client so every
    /// probe is individually bounded.
    pub fn new(config: ReadinessConfig) -> Result<Self, ReadinessError> {
        config.validate().map_err(ReadinessError::InvalidConfig)?;

        let client = reqwest::Client::builder()
            .timeout(config.attempt_timeout)
            .build()?;

        Ok(Self { config, client })
    }

    /// URL this waiter probes.
    pub fn target_url(&self) -> &str {
        &self.config.target_url
    }

    /// Block the calling task until the endpoint responds or the deadline
    /// elapses.
    pub async fn wait_until_ready(&self) -> Result<(), ReadinessError> {
        self.wait_with_handler(None).await
    }

    /// Same as [`wait_until_ready`](Self::wait_until_ready), invoking the
    /// handler after every failed probe that is going to be retried.
    pub async fn wait_with_handler(
        &self,
        on_retry: Option<RetryHandler>,
    ) -> Result<(), ReadinessError> {
        let start = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            match self.client.get(&self.config.target_url).send().await {
                Ok(response) => {
                    log::debug!(
                        "service at {} answered with status {} after {} attempt(s)",
                        self.config.target_url,
                        response.status(),
                        attempts
                    );
                    return Ok(());
                }
                Err(source) => {
                    let elapsed = start.elapsed();
                    if elapsed > self.config.deadline {
                        log::warn!(
                            "giving up on {} after {:?}: {}",
                            self.config.target_url,
                            elapsed,
                            source
                        );
                        return Err(ReadinessError::DeadlineExceeded {
                            url: self.config.target_url.clone(),
                            elapsed,
                            source,
                        });
                    }

                    log::debug!(
                        "probe {} against {} failed: {}",
                        attempts,
                        self.config.target_url,
                        source
                    );
                    if let Some(handler) = &on_retry {
                        handler(attempts, elapsed);
                    }

                    tokio::time::sleep(self.config.poll_interval).await;
                }
            }
        }
    }
}
