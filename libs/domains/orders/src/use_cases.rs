//! Order use cases, one struct per operation.
//!
//! [`AddOrder`] is the only one with rules of its own: it refuses orders
//! whose user or products cannot be found.

use axum_helpers::{FieldError, ValidationRejection};
use domain_products::{GetProductById, ProductRepository};
use domain_users::{GetUserById, UserRepository};
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};
use crate::models::{NewOrder, Order};
use crate::repository::OrderRepository;

/// Creates an order after checking that its user and every listed product
/// exist and are live.
pub struct AddOrder<O, U, P>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    orders: Arc<O>,
    get_user: GetUserById<U>,
    get_product: GetProductById<P>,
}

impl<O, U, P> AddOrder<O, U, P>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    pub fn new(orders: Arc<O>, get_user: GetUserById<U>, get_product: GetProductById<P>) -> Self {
        Self {
            orders,
            get_user,
            get_product,
        }
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, products = input.products_ids.len()))]
    pub async fn execute(&self, input: NewOrder) -> OrderResult<Order> {
        let errors = self.check_references(&input).await?;
        if !errors.is_empty() {
            tracing::warn!(violations = errors.len(), "Order rejected");
            return Err(ValidationRejection::new(errors).into());
        }

        self.orders.add(input).await
    }

    /// Looks up the user and all products concurrently; returns one entry per
    /// kind of unresolved reference, products first.
    async fn check_references(&self, input: &NewOrder) -> OrderResult<Vec<FieldError>> {
        let products = async {
            try_join_all(
                input
                    .products_ids
                    .iter()
                    .map(|id| self.get_product.execute(*id)),
            )
            .await
            .map_err(OrderError::from)
        };
        let user = async {
            self.get_user
                .execute(input.user_id)
                .await
                .map_err(OrderError::from)
        };

        let (products, user) = tokio::try_join!(products, user)?;

        let missing: Vec<String> = input
            .products_ids
            .iter()
            .zip(&products)
            .filter(|(_, found)| found.is_none())
            .map(|(id, _)| id.to_string())
            .collect();

        let mut errors = Vec::new();
        if !missing.is_empty() {
            errors.push(FieldError::new(
                "productsIds",
                format!("No products with ids {}", missing.join(", ")),
            ));
        }
        if user.is_none() {
            errors.push(FieldError::new(
                "userId",
                format!("No user with id {}", input.user_id),
            ));
        }
        Ok(errors)
    }
}

pub struct GetOrderById<O: OrderRepository> {
    repository: Arc<O>,
}

impl<O: OrderRepository> GetOrderById<O> {
    pub fn new(repository: Arc<O>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, order_id: Uuid) -> OrderResult<Option<Order>> {
        self.repository.get_by_id(order_id).await
    }
}

/// Replaces an order's fields. References are not re-checked.
pub struct UpdateOrder<O: OrderRepository> {
    repository: Arc<O>,
}

impl<O: OrderRepository> UpdateOrder<O> {
    pub fn new(repository: Arc<O>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn execute(&self, order: Order) -> OrderResult<Option<Order>> {
        self.repository.update(order).await
    }
}

pub struct DeleteOrder<O: OrderRepository> {
    repository: Arc<O>,
}

impl<O: OrderRepository> DeleteOrder<O> {
    pub fn new(repository: Arc<O>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, order_id: Uuid) -> OrderResult<Option<Order>> {
        self.repository.delete(order_id).await
    }
}

impl<O, U, P> Clone for AddOrder<O, U, P>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    fn clone(&self) -> Self {
        Self::new(
            Arc::clone(&self.orders),
            self.get_user.clone(),
            self.get_product.clone(),
        )
    }
}

impl<O: OrderRepository> Clone for GetOrderById<O> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<O: OrderRepository> Clone for UpdateOrder<O> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<O: OrderRepository> Clone for DeleteOrder<O> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

/// The order use cases the HTTP layer dispatches to
pub struct OrderUseCases<O, U, P>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    pub add: AddOrder<O, U, P>,
    pub get_by_id: GetOrderById<O>,
    pub update: UpdateOrder<O>,
    pub delete: DeleteOrder<O>,
}

impl<O, U, P> OrderUseCases<O, U, P>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    pub fn new(orders: Arc<O>, get_user: GetUserById<U>, get_product: GetProductById<P>) -> Self {
        Self {
            add: AddOrder::new(Arc::clone(&orders), get_user, get_product),
            get_by_id: GetOrderById::new(Arc::clone(&orders)),
            update: UpdateOrder::new(Arc::clone(&orders)),
            delete: DeleteOrder::new(orders),
        }
    }
}

impl<O, U, P> Clone for OrderUseCases<O, U, P>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    fn clone(&self) -> Self {
        Self {
            add: self.add.clone(),
            get_by_id: self.get_by_id.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}
