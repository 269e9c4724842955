//! # RustResolverGuard
//!
//! Request validation and service readiness toolkit for DNS resolver
//! endpoint emulation. The validation layer checks every field of an
//! inbound request and reports all constraint failures in one aggregated
//! error; the readiness layer polls an HTTP endpoint until it answers or
//! a deadline elapses.
//!
//! ## Features
//!
//! - **Accumulative Validation**: every field is checked, every failure
//!   is reported, in input order
//! - **Typed Field Dispatch**: a closed field enum makes unknown fields
//!   unrepresentable
//! - **Wire-Ready Errors**: violations serialize for HTTP 400 bodies and
//!   render as a single aggregated message
//! - **Readiness Probing**: fixed-interval HTTP polling with per-attempt
//!   timeouts and an overall deadline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resolver_guard::{FieldValidator, RequestField};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let validator = FieldValidator::new()?;
//!
//!     let pairs = vec![
//!         (RequestField::Name, json!("primary-endpoint")),
//!         (RequestField::Direction, json!("INBOUND")),
//!         (RequestField::SecurityGroupIds, json!(["sg-0a1b2c"])),
//!     ];
//!
//!     match validator.validate(&pairs) {
//!         Ok(()) => println!("request accepted"),
//!         Err(error) => println!("rejected: {}", error),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod readiness;

// Validation exports
pub use crate::core::{FieldValidator, RequestField};

// Readiness exports
pub use crate::readiness::{ReadinessWaiter, RetryHandler};

// Configuration exports
pub use crate::config::ReadinessConfig;

// Error exports
pub use crate::error::{ReadinessError, ValidationError, Violation};

// Re-export common dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value as JsonValue};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        FieldValidator, ReadinessConfig, ReadinessError, ReadinessWaiter, RequestField,
        RetryHandler, ValidationError, Violation,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
