pub mod waiter;

pub use waiter::{ReadinessWaiter, RetryHandler};
