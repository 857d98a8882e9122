//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::Lifecycle;
use database::mongodb::{bson_uuid, uuid_from_bson};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, Uuid as BsonUuid, doc, to_bson},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Meta, NewProduct, Product};
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: BsonUuid,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    images: Vec<String>,
    price: f64,
    #[serde(default)]
    color: String,
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    lifecycle: Lifecycle,
}

impl From<Product> for ProductDocument {
    fn from(product: Product) -> Self {
        Self {
            id: bson_uuid(product.id),
            name: product.name,
            description: product.description,
            images: product.images,
            price: product.price,
            color: product.color,
            meta: product.meta,
            updated_at: product.updated_at,
            lifecycle: product.lifecycle,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: uuid_from_bson(doc.id),
            name: doc.name,
            description: doc.description,
            images: doc.images,
            price: doc.price,
            color: doc.color,
            meta: doc.meta,
            updated_at: doc.updated_at,
            lifecycle: doc.lifecycle,
        }
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoDB product repository
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, "products")
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ProductDocument>(collection_name),
        }
    }

    /// Create indexes for the products collection
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "lifecycle.state": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_lifecycle_state".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    fn live_filter(id: Uuid) -> Document {
        doc! {
            "_id": bson_uuid(id),
            "lifecycle.state": Lifecycle::ACTIVE_STATE,
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input))]
    async fn add(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection
            .insert_one(ProductDocument::from(product.clone()))
            .await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::live_filter(id)).await?;
        Ok(product.map(Product::from))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        let update = doc! {
            "$set": {
                "name": &product.name,
                "description": &product.description,
                "images": to_bson(&product.images)?,
                "price": product.price,
                "color": &product.color,
                "meta": to_bson(&product.meta)?,
                "updatedAt": to_bson(&Utc::now())?,
            }
        };

        let updated = self
            .collection
            .find_one_and_update(Self::live_filter(product.id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(product_id = %product.id, "Product updated");
        }
        Ok(updated.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let update = doc! {
            "$set": { "lifecycle": to_bson(&Lifecycle::deleted_now())? }
        };

        let deleted = self
            .collection
            .find_one_and_update(Self::live_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if deleted.is_some() {
            tracing::info!(product_id = %id, "Product soft-deleted");
        }
        Ok(deleted.map(Product::from))
    }
}
