use std::env;
use std::time::Duration;

/// Configuration for ReadinessWaiter
#[derive(Debug, Clone)]
pub struct ReadinessConfig {
    /// URL probed until it answers (Default: http://localhost:5000/)
    pub target_url: String,

    /// Timeout applied to each individual probe (Default: 1s)
    pub attempt_timeout: Duration,

    /// Pause between failed probes (Default: 1s)
    pub poll_interval: Duration,

    /// Total wall-clock budget before giving up (Default: 120s)
    pub deadline: Duration,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            target_url: format!("http://localhost:{}/", Self::DEFAULT_PORT),
            attempt_timeout: Duration::from_secs(1),
            poll_interval: Duration::from_secs(1),
            deadline: Duration::from_secs(120),
        }
    }
}

impl ReadinessConfig {
    /// Environment variable consulted for the target port
    pub const PORT_ENV_VAR: &'static str = "RESOLVER_EMU_PORT";

    /// Port assumed when the environment variable is absent
    pub const DEFAULT_PORT: &'static str = "5000";

    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration from the process environment.
    ///
    /// Only the port is environment-driven; the probe always targets
    /// `http://localhost:<port>/` and the timing values stay at their
    /// defaults.
    pub fn from_env() -> Self {
        let port = env::var(Self::PORT_ENV_VAR).unwrap_or_else(|_| Self::DEFAULT_PORT.to_string());
        Self {
            target_url: format!("http://localhost:{}/", port),
            ..Self::default()
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.target_url.is_empty() {
            return Err("target_url must not be empty".to_string());
        }

        if self.attempt_timeout.is_zero() {
            return Err("attempt_timeout must be greater than 0".to_string());
        }

        if self.poll_interval.is_zero() {
            return Err("poll_interval must be greater than 0".to_string());
        }

        if self.deadline.is_zero() {
            return Err("deadline must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReadinessConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_url, "http://localhost:5000/");
        assert_eq!(config.deadline, Duration::from_secs(120));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ReadinessConfig::new();
        config.deadline = Duration::from_secs(0);
        assert!(config.validate().is_err());

        let mut config = ReadinessConfig::new();
        config.target_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_honors_port_variable() {
        env::set_var(ReadinessConfig::PORT_ENV_VAR, "8123");
        let config = ReadinessConfig::from_env();
        assert_eq!(config.target_url, "http://localhost:8123/");

        env::remove_var(ReadinessConfig::PORT_ENV_VAR);
        let config = ReadinessConfig::from_env();
        assert_eq!(config.target_url, "http://localhost:5000/");
    }
}
