pub mod readiness_error;
pub mod validation_error;

pub use readiness_error::ReadinessError;
pub use validation_error::{ValidationError, Violation};
