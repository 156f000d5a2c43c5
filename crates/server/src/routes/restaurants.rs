use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::errors::ServiceError;
use service::views::{RestaurantDetail, RestaurantSummary};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

/// Reads the `{id}` segment. Text that is not an integer is a bad request;
/// an integer too large for the id column names no restaurant.
fn restaurant_id(path: Result<Path<String>, PathRejection>) -> Result<i32, ApiError> {
    let Path(raw) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    match raw.parse::<i32>() {
        Ok(id) => Ok(id),
        Err(_) if is_integer(&raw) => Err(ServiceError::not_found("Restaurant").into()),
        Err(e) => Err(ApiError::BadRequest(format!("invalid restaurant id {raw:?}: {e}"))),
    }
}

fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [crate::openapi::RestaurantDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let list = state.restaurants.list_restaurants().await?;
    info!(count = list.len(), "list restaurants");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = crate::openapi::RestaurantDetailDoc),
        (status = 400, description = "Id is not an integer", body = crate::openapi::ErrorsDoc),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let id = restaurant_id(path)?;
    Ok(Json(state.restaurants.get_restaurant(id).await?))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Deleted together with its restaurant pizzas"),
        (status = 400, description = "Id is not an integer", body = crate::openapi::ErrorsDoc),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;
    state.restaurants.delete_restaurant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
