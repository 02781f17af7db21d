use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{Envelope, IdPath};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, ProductInput)),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All products wrapped in a success envelope", body = [Product]),
        (status = 500, description = "Storage failure")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Envelope<Vec<Product>>>> {
    let products = service.list_products().await?;
    Ok(Json(Envelope::data(products)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Envelope<Product>>> {
    let product = service.get_product(id).await?;
    Ok(Json(Envelope::data(product)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductInput,
    responses(
        (status = 200, description = "Stored product, including its assigned id", body = Product),
        (status = 400, description = "Missing request body"),
        (status = 500, description = "Storage failure")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ProductResult<Json<Envelope<Product>>> {
    let Json(input) = body.map_err(|_| ProductError::MissingBody)?;

    let product = service.create_product(input).await?;
    Ok(Json(Envelope::data(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Missing request body"),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ProductResult<Json<Envelope<Product>>> {
    // The body stays optional up to the service so the existence check can
    // run first: an unknown id must 404 even when the body is absent.
    let input = body.map(|Json(input)| input).ok();

    let product = service.update_product(id, input).await?;
    Ok(Json(Envelope::data(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted; a confirmation envelope is still attached"),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;

    let envelope = Envelope::<()>::message(format!("Product with id: {} deleted", id));
    Ok((StatusCode::NO_CONTENT, Json(envelope)))
}
