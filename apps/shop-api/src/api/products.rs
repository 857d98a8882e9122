//! Products API routes

use axum::Router;
use domain_products::{MongoProductRepository, ProductRepository, ProductUseCases, handlers};
use mongodb::Database;
use std::sync::Arc;

pub fn router<R: ProductRepository + 'static>(repository: Arc<R>) -> Router {
    handlers::router(ProductUseCases::new(repository))
}

pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoProductRepository::new(db).init_indexes().await?;
    Ok(())
}
