//! Orders API routes

use axum::Router;
use domain_orders::{MongoOrderRepository, OrderRepository, OrderUseCases, handlers};
use domain_products::{GetProductById, ProductRepository};
use domain_users::{GetUserById, UserRepository};
use mongodb::Database;
use std::sync::Arc;

/// Order creation looks references up through the user and product use cases
pub fn router<O, U, P>(orders: Arc<O>, users: Arc<U>, products: Arc<P>) -> Router
where
    O: OrderRepository + 'static,
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let use_cases = OrderUseCases::new(
        orders,
        GetUserById::new(users),
        GetProductById::new(products),
    );
    handlers::router(use_cases)
}

pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoOrderRepository::new(db).init_indexes().await?;
    Ok(())
}
