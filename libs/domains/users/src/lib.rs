//! Users Domain
//!
//! User records with interchangeable storage backends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, {status, content} envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← AddUser, GetUserById, UpdateUser, DeleteUser
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and MongoDB implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, NewUser, Gender
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserUseCases};
//! use std::sync::Arc;
//!
//! let repository = Arc::new(InMemoryUserRepository::new());
//! let router = handlers::router(UserUseCases::new(repository));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod use_cases;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{Gender, Meta, NewUser, User};
pub use mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use use_cases::{AddUser, DeleteUser, GetUserById, UpdateUser, UserUseCases};
