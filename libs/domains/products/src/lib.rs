//! Products Domain
//!
//! Catalog entries with interchangeable storage backends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, {status, content} envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← AddProduct, GetProductById, UpdateProduct, DeleteProduct
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and MongoDB implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, NewProduct
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductRepository, ProductUseCases};
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let repository = MongoProductRepository::new(&db);
//! repository.init_indexes().await?;
//!
//! let router = handlers::router(ProductUseCases::new(Arc::new(repository)));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod use_cases;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Meta, NewProduct, Product};
pub use mongodb::MongoProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use use_cases::{AddProduct, DeleteProduct, GetProductById, ProductUseCases, UpdateProduct};
