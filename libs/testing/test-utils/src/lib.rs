//! Shared test utilities for the domain crates
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: per-test database names and identifiers
//!
//! # MongoDB Testing
//!
//! Add `features = ["mongo"]` to your dev-dependencies:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let db = mongo.database(&builder.database_name());
//! }
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Deterministic names and ids derived from a seed.
///
/// Tests sharing one MongoDB container stay isolated by building their
/// database name from their own test name.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test's name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_add_order");
    /// assert!(builder.database_name().starts_with("shop_test_"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A MongoDB database name unique to this seed
    pub fn database_name(&self) -> String {
        format!("shop_test_{:016x}", self.seed)
    }

    /// An id that no repository has handed out
    pub fn user_id(&self) -> Uuid {
        self.id(b'u', 0)
    }

    pub fn product_id(&self, index: u32) -> Uuid {
        self.id(b'p', index)
    }

    pub fn order_id(&self) -> Uuid {
        self.id(b'o', 0)
    }

    fn id(&self, kind: u8, index: u32) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8] = kind;
        bytes[12..].copy_from_slice(&index.to_le_bytes());
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}
