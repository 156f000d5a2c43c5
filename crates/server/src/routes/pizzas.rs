use axum::{extract::State, Json};
use service::views::PizzaView;
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/pizzas", tag = "pizzas",
    responses((status = 200, description = "All pizzas", body = [crate::openapi::PizzaDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PizzaView>>, ApiError> {
    let list = state.restaurants.list_pizzas().await?;
    info!(count = list.len(), "list pizzas");
    Ok(Json(list))
}
