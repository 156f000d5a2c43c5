//! Persistence seam for the three record types.
//!
//! Lookups of a missing id return `Ok(None)`; only genuine storage failures
//! are errors. Every write is a single atomic commit.

use async_trait::async_trait;
use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::ServiceError;

pub mod seaorm;

pub use seaorm::SeaOrmStore;

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError>;
    async fn find_restaurant(&self, id: i32) -> Result<Option<restaurant::Model>, ServiceError>;
    async fn restaurant_pizzas_of(&self, restaurant_id: i32) -> Result<Vec<restaurant_pizza::Model>, ServiceError>;
    /// Removes the restaurant and every restaurant pizza pointing at it. `false` when absent.
    async fn delete_restaurant(&self, id: i32) -> Result<bool, ServiceError>;

    async fn list_pizzas(&self) -> Result<Vec<pizza::Model>, ServiceError>;
    async fn find_pizza(&self, id: i32) -> Result<Option<pizza::Model>, ServiceError>;
    /// Removes the pizza and every restaurant pizza pointing at it. `false` when absent.
    async fn delete_pizza(&self, id: i32) -> Result<bool, ServiceError>;

    async fn find_restaurant_pizza(&self, id: i32) -> Result<Option<restaurant_pizza::Model>, ServiceError>;
    /// Fails with `NotFound` if either parent disappeared before the insert committed.
    async fn insert_restaurant_pizza(&self, price: f64, restaurant_id: i32, pizza_id: i32) -> Result<restaurant_pizza::Model, ServiceError>;
}
