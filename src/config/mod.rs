pub mod readiness_config;

pub use readiness_config::ReadinessConfig;
