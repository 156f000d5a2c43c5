use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use service::{validation::NewRestaurantPizza, views::RestaurantPizzaDetail};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/restaurant_pizzas", tag = "restaurant_pizzas",
    request_body = crate::openapi::CreateRestaurantPizzaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantPizzaDoc),
        (status = 400, description = "Price outside 1..=30 or unreadable body", body = crate::openapi::ErrorsDoc),
        (status = 404, description = "Pizza or restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewRestaurantPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaDetail>), ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!(price = ?input.price, pizza_id = ?input.pizza_id, restaurant_id = ?input.restaurant_id, "restaurant_pizza_create_request");
    let created = state.restaurants.create_restaurant_pizza(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
