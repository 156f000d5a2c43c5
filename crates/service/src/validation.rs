//! Admission rules for a new restaurant pizza.
//!
//! Order matters: the price is judged before either reference is looked up,
//! and the pizza is looked up before the restaurant.

use models::{pizza, restaurant, restaurant_pizza};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::store::EntityStore;

/// Message carried by every rejected price.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Candidate as received; every field may be missing.
///
/// Ids are read wider than the id column so an out-of-range id is reported
/// as a missing row rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NewRestaurantPizza {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub pizza_id: Option<i64>,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
}

/// A candidate that passed every check, with the rows it references.
#[derive(Debug, Clone)]
pub struct ValidatedRestaurantPizza {
    pub price: f64,
    pub restaurant: restaurant::Model,
    pub pizza: pizza::Model,
}

pub fn check_price(price: Option<f64>) -> Result<f64, ServiceError> {
    price
        .and_then(|p| restaurant_pizza::validate_price(p).ok())
        .ok_or_else(|| ServiceError::Validation(VALIDATION_ERRORS.into()))
}

/// Narrows a received id to the column type; `None` means no row can have it.
pub fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

pub async fn validate_new_restaurant_pizza<S>(
    store: &S,
    input: &NewRestaurantPizza,
) -> Result<ValidatedRestaurantPizza, ServiceError>
where
    S: EntityStore + ?Sized,
{
    let price = check_price(input.price)?;

    let pizza = match input.pizza_id.and_then(row_id) {
        Some(id) => store.find_pizza(id).await?,
        None => None,
    }
    .ok_or_else(|| ServiceError::not_found("Pizza"))?;

    let restaurant = match input.restaurant_id.and_then(row_id) {
        Some(id) => store.find_restaurant(id).await?,
        None => None,
    }
    .ok_or_else(|| ServiceError::not_found("Restaurant"))?;

    Ok(ValidatedRestaurantPizza { price, restaurant, pizza })
}
