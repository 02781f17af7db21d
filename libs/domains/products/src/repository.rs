use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products. Implementations
/// can use different storage backends (PostgreSQL, in-memory, etc.). Identifier
/// generation belongs to the backend: `create` takes fields only and returns
/// the stored row with its assigned id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in storage order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by id
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Check whether a product with this id exists
    async fn exists(&self, id: i64) -> ProductResult<bool>;

    /// Insert a new product; the backend assigns the id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Update name/description/price of an existing product.
    ///
    /// Returns `None` when no row matched the id.
    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Option<Product>>;

    /// Delete a product by id; returns whether a row was removed
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(0)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product::from_input(id, input);

        let mut products = self.products.write().await;
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        match products.get_mut(&id) {
            Some(product) => {
                product.name = input.name;
                product.description = input.description;
                product.price = input.price;

                tracing::info!(product_id = id, "Updated product");
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
