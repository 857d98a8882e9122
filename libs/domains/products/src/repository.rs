use async_trait::async_trait;
use database::InMemoryCollection;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// Soft-deleted products are invisible to every method.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn add(&self, input: NewProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    async fn update(&self, product: Product) -> ProductResult<Option<Product>>;

    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>>;
}

/// In-memory implementation of ProductRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: InMemoryCollection<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self, input))]
    async fn add(&self, input: NewProduct) -> ProductResult<Product> {
        let product = self.products.insert(Product::new(input)).await;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self.products.find_live(id).await)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        let updated = self.products.replace_live(product).await;
        if let Some(ref product) = updated {
            tracing::info!(product_id = %product.id, "Product updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let deleted = self.products.mark_deleted(id).await;
        if deleted.is_some() {
            tracing::info!(product_id = %id, "Product soft-deleted");
        }
        Ok(deleted)
    }
}
