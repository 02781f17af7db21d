use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Service layer for Product operations.
///
/// Maps repository results onto the operation contracts: absent rows become
/// [`ProductError::NotFound`], and mutations run an existence pre-check so a
/// missing id yields an accurate 404 instead of a silent no-op. Storage errors
/// pass through untouched; they are surfaced, never retried.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product; the storage-assigned id comes back on the result
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Update a product's name/description/price.
    ///
    /// The body is optional because the existence check runs first: an
    /// unknown id is a 404 even when no body was sent.
    pub async fn update_product(
        &self,
        id: i64,
        input: Option<ProductInput>,
    ) -> ProductResult<Product> {
        if !self.repository.exists(id).await? {
            return Err(ProductError::NotFound(id));
        }

        let input = input.ok_or(ProductError::MissingBody)?;

        // The row can disappear between the pre-check and the update; treat
        // that the same as a failed pre-check.
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product by id
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if !self.repository.exists(id).await? {
            return Err(ProductError::NotFound(id));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
