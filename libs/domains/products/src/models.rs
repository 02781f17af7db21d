use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - one row of the `products` table.
///
/// The id is assigned by storage on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Storage-assigned identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price
    pub price: f64,
}

/// Request body for creating or updating a product.
///
/// All three fields must be present; anything beyond presence is not
/// validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Materialize a product from submitted fields and a storage-assigned id.
    pub fn from_input(id: i64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
        }
    }
}
