use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use cartzy_core::{Offers, Product, ProductId, FEATURED_DEALS};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct OffersItem {
    flash_deals: Vec<Product>,
    regular_offers: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProductQuery {
    /// Free-text search over name, description and tags.
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DealsQuery {
    pub limit: Option<usize>,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let data: Vec<Product> = state
        .catalog
        .search(query.q.as_deref(), query.category.as_deref())
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        q = ?query.q,
        category = ?query.category,
        matches = data.len(),
        "listed products"
    );

    Json(ApiResponse::new(req_id.0, data))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog.get(id))
        .cloned()
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "product not found"))?;

    Ok(Json(ApiResponse::new(req_id.0, product)))
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let data = state
        .catalog
        .categories()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    Json(ApiResponse::new(req_id.0, data))
}

pub(super) async fn list_offers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<OffersItem>> {
    let Offers {
        flash_deals,
        regular_offers,
    } = state.catalog.offers();

    let data = OffersItem {
        flash_deals: flash_deals.into_iter().cloned().collect(),
        regular_offers: regular_offers.into_iter().cloned().collect(),
    };
    Json(ApiResponse::new(req_id.0, data))
}

pub(super) async fn list_deals(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<DealsQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let data = state
        .catalog
        .featured_deals(query.limit.unwrap_or(FEATURED_DEALS))
        .into_iter()
        .cloned()
        .collect();
    Json(ApiResponse::new(req_id.0, data))
}
