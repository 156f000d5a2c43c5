use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::store::EntityStore;
use crate::validation::{validate_new_restaurant_pizza, NewRestaurantPizza};
use crate::views::{PizzaView, RestaurantDetail, RestaurantPizzaDetail, RestaurantSummary};

/// Application service behind every HTTP operation.
/// Returns transport-ready views; absent rows become `ServiceError::NotFound`.
pub struct RestaurantService<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> RestaurantService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    pub fn store(&self) -> &S { &self.store }

    #[instrument(skip(self))]
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantSummary>, ServiceError> {
        let rows = self.store.list_restaurants().await?;
        Ok(rows.iter().map(RestaurantSummary::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_restaurant(&self, id: i32) -> Result<RestaurantDetail, ServiceError> {
        let restaurant = self
            .store
            .find_restaurant(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant"))?;
        let children = self.store.restaurant_pizzas_of(id).await?;
        Ok(RestaurantDetail::new(&restaurant, &children))
    }

    #[instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: i32) -> Result<(), ServiceError> {
        if !self.store.delete_restaurant(id).await? {
            return Err(ServiceError::not_found("Restaurant"));
        }
        info!(restaurant_id = id, "deleted restaurant");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_pizzas(&self) -> Result<Vec<PizzaView>, ServiceError> {
        let rows = self.store.list_pizzas().await?;
        Ok(rows.iter().map(PizzaView::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn create_restaurant_pizza(&self, input: NewRestaurantPizza) -> Result<RestaurantPizzaDetail, ServiceError> {
        let valid = validate_new_restaurant_pizza(self.store.as_ref(), &input).await?;
        let created = self
            .store
            .insert_restaurant_pizza(valid.price, valid.restaurant.id, valid.pizza.id)
            .await?;
        info!(id = created.id, restaurant_id = created.restaurant_id, pizza_id = created.pizza_id, price = created.price, "created restaurant pizza");
        Ok(RestaurantPizzaDetail::new(&created, &valid.restaurant, &valid.pizza))
    }
}
