use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::app::state::AppState;
use crate::models::product::{NewProduct, ProductUpdate};
use crate::services::ApiError;
use crate::utils::defaults;

pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<NewProduct>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if !product.has_required_fields() {
        return Err(ApiError::MissingField(
            "Missing required fields: name, description, type, category".to_string(),
        ));
    }

    let created = state.products.create_product(product.into_payload()).await?;
    if let Some(id) = created["id"].as_str() {
        info!("Product created: {}", id);
    }
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let product = state.products.get_product(&product_id).await?;
    Ok(Json(product))
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Value>, ApiError> {
    let products = state
        .products
        .list_products(
            query.page.unwrap_or(defaults::PRODUCT_LIST_PAGE),
            query.page_size.unwrap_or(defaults::PRODUCT_LIST_PAGE_SIZE),
        )
        .await?;
    Ok(Json(products))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .products
        .update_product(&product_id, update.patch_ops())
        .await?;
    Ok(Json(result))
}
