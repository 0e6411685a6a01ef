//! Resilience for POS API calls

pub mod retry;

pub use retry::{Idempotency, RetryConfig, RetryPolicy};
