//! Service layer for the restaurant/pizza catalogue.
//! - `store` hides persistence behind the `EntityStore` trait.
//! - `validation` decides whether a new restaurant pizza may be written.
//! - `views` renders records into their transport shapes.
//! - `RestaurantService` ties the three together for the HTTP layer.

pub mod errors;
pub mod store;
pub mod validation;
pub mod views;
pub mod restaurant_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;

pub use restaurant_service::RestaurantService;
