use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::Product,
    queries::product_queries,
    utils::extractors::{JsonBody, RawBody, decode_json, parse_id},
};

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::find_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    // a non-integer segment can never match a stored id
    let id = parse_id(&id).ok_or_else(not_found)?;

    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Product>,
) -> Result<Json<Product>> {
    let id = product_queries::insert(&state.db, &payload).await?;

    Ok(Json(payload.with_id(id)))
}

/// Replaces every column of the product.
///
/// The path id is checked before the body is decoded. The affected row count
/// is not inspected, so updating an id with no row still answers with the
/// submitted product.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawBody(body): RawBody,
) -> Result<Json<Product>> {
    let id = parse_id(&id)
        .ok_or_else(|| AppError::UnprocessableEntity(format!("Invalid product id: {}", id)))?;
    let payload: Product = decode_json(&body)?;

    product_queries::update(&state.db, id, &payload).await?;

    Ok(Json(payload.with_id(id)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id).ok_or_else(not_found)?;

    if product_queries::delete(&state.db, id).await? < 1 {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
