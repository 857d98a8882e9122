//! Orders Domain
//!
//! Orders reference one user and a list of products. Creation checks that
//! every reference points at a live record before anything is stored.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, {status, content} envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← AddOrder (validates references), GetOrderById, ...
//! └──────┬──────┘
//!        │            ┌──────────────────────────────┐
//!        ├───────────►│ GetUserById / GetProductById │
//!        │            └──────────────────────────────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and MongoDB implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Order, NewOrder, ReplaceOrder
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_orders::{handlers, InMemoryOrderRepository, OrderUseCases};
//! use domain_products::{GetProductById, InMemoryProductRepository};
//! use domain_users::{GetUserById, InMemoryUserRepository};
//! use std::sync::Arc;
//!
//! let users = Arc::new(InMemoryUserRepository::new());
//! let products = Arc::new(InMemoryProductRepository::new());
//! let orders = Arc::new(InMemoryOrderRepository::new());
//!
//! let use_cases = OrderUseCases::new(
//!     orders,
//!     GetUserById::new(users),
//!     GetProductById::new(products),
//! );
//! let router = handlers::router(use_cases);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod use_cases;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{Meta, NewOrder, Order, ReplaceOrder};
pub use mongodb::MongoOrderRepository;
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use use_cases::{AddOrder, DeleteOrder, GetOrderById, OrderUseCases, UpdateOrder};
