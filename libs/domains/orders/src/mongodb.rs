//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::Lifecycle;
use database::mongodb::{bson_uuid, bson_uuids, uuid_from_bson, uuids_from_bson};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, Uuid as BsonUuid, doc, to_bson},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{Meta, NewOrder, Order};
use crate::repository::OrderRepository;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderDocument {
    #[serde(rename = "_id")]
    id: BsonUuid,
    user_id: BsonUuid,
    #[serde(default)]
    products_ids: Vec<BsonUuid>,
    date: DateTime<Utc>,
    #[serde(default)]
    is_payed: bool,
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    lifecycle: Lifecycle,
}

impl From<Order> for OrderDocument {
    fn from(order: Order) -> Self {
        Self {
            id: bson_uuid(order.id),
            user_id: bson_uuid(order.user_id),
            products_ids: bson_uuids(&order.products_ids),
            date: order.date,
            is_payed: order.is_payed,
            meta: order.meta,
            updated_at: order.updated_at,
            lifecycle: order.lifecycle,
        }
    }
}

impl From<OrderDocument> for Order {
    fn from(doc: OrderDocument) -> Self {
        Self {
            id: uuid_from_bson(doc.id),
            user_id: uuid_from_bson(doc.user_id),
            products_ids: uuids_from_bson(doc.products_ids),
            date: doc.date,
            is_payed: doc.is_payed,
            meta: doc.meta,
            updated_at: doc.updated_at,
            lifecycle: doc.lifecycle,
        }
    }
}

/// MongoDB implementation of the OrderRepository
pub struct MongoOrderRepository {
    collection: Collection<OrderDocument>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, "orders")
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<OrderDocument>(collection_name),
        }
    }

    /// Indexes on `lifecycle.state` and `userId`
    pub async fn init_indexes(&self) -> OrderResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "lifecycle.state": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_lifecycle_state".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "userId": 1 })
                .options(IndexOptions::builder().name("idx_user_id".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Order indexes created successfully");
        Ok(())
    }

    fn live_filter(id: Uuid) -> Document {
        doc! {
            "_id": bson_uuid(id),
            "lifecycle.state": Lifecycle::ACTIVE_STATE,
        }
    }

    /// Fields written by `update`, keyed like [`OrderDocument`]
    fn replacement(order: &Order) -> OrderResult<Document> {
        Ok(doc! {
            "userId": bson_uuid(order.user_id),
            "productsIds": bson_uuids(&order.products_ids),
            "date": to_bson(&order.date)?,
            "isPayed": order.is_payed,
            "meta": to_bson(&order.meta)?,
            "updatedAt": to_bson(&Utc::now())?,
        })
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn add(&self, input: NewOrder) -> OrderResult<Order> {
        let order = Order::new(input);

        self.collection
            .insert_one(OrderDocument::from(order.clone()))
            .await?;

        tracing::info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let order = self.collection.find_one(Self::live_filter(id)).await?;
        Ok(order.map(Order::from))
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn update(&self, order: Order) -> OrderResult<Option<Order>> {
        let update = doc! { "$set": Self::replacement(&order)? };

        let updated = self
            .collection
            .find_one_and_update(Self::live_filter(order.id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(order_id = %order.id, "Order updated");
        }
        Ok(updated.map(Order::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let update = doc! {
            "$set": { "lifecycle": to_bson(&Lifecycle::deleted_now())? }
        };

        let deleted = self
            .collection
            .find_one_and_update(Self::live_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if deleted.is_some() {
            tracing::info!(order_id = %id, "Order soft-deleted");
        }
        Ok(deleted.map(Order::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{from_slice, to_raw_document_buf};

    #[test]
    fn test_live_filter_targets_active_record() {
        let filter = MongoOrderRepository::live_filter(Uuid::now_v7());
        assert_eq!(filter.get_str("lifecycle.state").unwrap(), "active");
    }

    #[test]
    fn test_stored_ids_match_filter_and_update() {
        let product = Uuid::now_v7();
        let order = Order::new(NewOrder::new(Uuid::now_v7(), vec![product, product]));

        // insert_one goes through the raw serializer
        let raw = to_raw_document_buf(&OrderDocument::from(order.clone())).unwrap();
        let stored = raw.to_document().unwrap();
        let filter = MongoOrderRepository::live_filter(order.id);
        let replacement = MongoOrderRepository::replacement(&order).unwrap();

        assert_eq!(stored.get("_id"), filter.get("_id"));
        assert_eq!(stored.get("userId"), replacement.get("userId"));
        assert_eq!(stored.get("productsIds"), replacement.get("productsIds"));
        assert_eq!(stored.get_array("productsIds").unwrap().len(), 2);
        assert_eq!(stored.get("date"), replacement.get("date"));
        assert!(!stored.get_bool("isPayed").unwrap());
        assert!(!stored.contains_key("id"));

        let back: OrderDocument = from_slice(raw.as_bytes()).unwrap();
        assert_eq!(Order::from(back), order);
    }
}
