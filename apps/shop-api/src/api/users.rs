//! Users API routes

use axum::Router;
use domain_users::{MongoUserRepository, UserRepository, UserUseCases, handlers};
use mongodb::Database;
use std::sync::Arc;

pub fn router<R: UserRepository + 'static>(repository: Arc<R>) -> Router {
    handlers::router(UserUseCases::new(repository))
}

pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoUserRepository::new(db).init_indexes().await?;
    Ok(())
}
