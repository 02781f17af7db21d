use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// PostgreSQL implementation of [`ProductRepository`].
///
/// Holds a connection pool, never a single connection: each statement acquires
/// a pooled connection for its own duration and releases it on every exit
/// path, success or error. All statements are parameterized; values are bound,
/// never interpolated.
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Explicit column-by-name decode.
///
/// `try_get` fails with `ColumnNotFound` when an expected column is missing
/// from the result set, which surfaces as a 500 instead of silently producing
/// a half-decoded record.
impl FromRow<'_, PgRow> for Product {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
        })
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn exists(&self, id: i64) -> ProductResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, description, price",
        )
        .bind(input.name)
        .bind(input.description)
        .bind(input.price)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, description = $2, price = $3 \
             WHERE id = $4 \
             RETURNING id, name, description, price",
        )
        .bind(input.name)
        .bind(input.description)
        .bind(input.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if product.is_some() {
            tracing::info!(product_id = id, "Updated product");
        }
        Ok(product)
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
