use async_trait::async_trait;
use database::InMemoryCollection;
use tracing::instrument;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{NewOrder, Order};

/// Repository trait for Order persistence
///
/// References to users and products are stored as given; checking them is
/// the job of the add use case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn add(&self, input: NewOrder) -> OrderResult<Order>;

    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>>;

    async fn update(&self, order: Order) -> OrderResult<Option<Order>>;

    async fn delete(&self, id: Uuid) -> OrderResult<Option<Order>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderRepository {
    orders: InMemoryCollection<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn add(&self, input: NewOrder) -> OrderResult<Order> {
        let order = self.orders.insert(Order::new(input)).await;
        tracing::info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        Ok(self.orders.find_live(id).await)
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn update(&self, order: Order) -> OrderResult<Option<Order>> {
        let updated = self.orders.replace_live(order).await;
        if let Some(ref order) = updated {
            tracing::info!(order_id = %order.id, "Order updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let deleted = self.orders.mark_deleted(id).await;
        if deleted.is_some() {
            tracing::info!(order_id = %id, "Order soft-deleted");
        }
        Ok(deleted)
    }
}
