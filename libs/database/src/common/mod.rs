//! Utilities shared by every backend

pub mod error;
pub mod lifecycle;
pub mod memory;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use lifecycle::Lifecycle;
pub use memory::{InMemoryCollection, Record};
pub use retry::{RetryConfig, retry, retry_with_backoff};
