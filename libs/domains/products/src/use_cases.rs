//! Product use cases, one struct per operation.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

pub struct AddProduct<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> AddProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input))]
    pub async fn execute(&self, input: NewProduct) -> ProductResult<Product> {
        self.repository.add(input).await
    }
}

/// Also consumed by order creation to resolve referenced products.
pub struct GetProductById<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> GetProductById<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, product_id: Uuid) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(product_id).await
    }
}

pub struct UpdateProduct<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> UpdateProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn execute(&self, product: Product) -> ProductResult<Option<Product>> {
        self.repository.update(product).await
    }
}

pub struct DeleteProduct<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> DeleteProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, product_id: Uuid) -> ProductResult<Option<Product>> {
        self.repository.delete(product_id).await
    }
}

impl<R: ProductRepository> Clone for AddProduct<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<R: ProductRepository> Clone for GetProductById<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<R: ProductRepository> Clone for UpdateProduct<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<R: ProductRepository> Clone for DeleteProduct<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

pub struct ProductUseCases<R: ProductRepository> {
    pub add: AddProduct<R>,
    pub get_by_id: GetProductById<R>,
    pub update: UpdateProduct<R>,
    pub delete: DeleteProduct<R>,
}

impl<R: ProductRepository> ProductUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            add: AddProduct::new(Arc::clone(&repository)),
            get_by_id: GetProductById::new(Arc::clone(&repository)),
            update: UpdateProduct::new(Arc::clone(&repository)),
            delete: DeleteProduct::new(repository),
        }
    }
}

impl<R: ProductRepository> Clone for ProductUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            add: self.add.clone(),
            get_by_id: self.get_by_id.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}
