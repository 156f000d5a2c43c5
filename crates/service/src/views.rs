//! Transport shapes. Each record type gets an explicit shallow rendering and,
//! where it owns children, a nested one. Children never re-embed their parents
//! inside a parent's rendering, so no shape recurses.

use models::{pizza, restaurant, restaurant_pizza};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<&restaurant::Model> for RestaurantSummary {
    fn from(m: &restaurant::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), address: m.address.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaSummary>,
}

impl RestaurantDetail {
    pub fn new(m: &restaurant::Model, children: &[restaurant_pizza::Model]) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            address: m.address.clone(),
            restaurant_pizzas: children.iter().map(RestaurantPizzaSummary::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaView {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<&pizza::Model> for PizzaView {
    fn from(m: &pizza::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), ingredients: m.ingredients.clone() }
    }
}

/// Restaurant pizza as listed under its restaurant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPizzaSummary {
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

impl From<&restaurant_pizza::Model> for RestaurantPizzaSummary {
    fn from(m: &restaurant_pizza::Model) -> Self {
        Self { id: m.id, price: m.price, restaurant_id: m.restaurant_id, pizza_id: m.pizza_id }
    }
}

/// Restaurant pizza on its own, embedding shallow renderings of both parents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPizzaDetail {
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantSummary,
    pub pizza: PizzaView,
}

impl RestaurantPizzaDetail {
    pub fn new(m: &restaurant_pizza::Model, restaurant: &restaurant::Model, pizza: &pizza::Model) -> Self {
        Self {
            id: m.id,
            price: m.price,
            restaurant_id: m.restaurant_id,
            pizza_id: m.pizza_id,
            restaurant: restaurant.into(),
            pizza: pizza.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> (restaurant::Model, pizza::Model, restaurant_pizza::Model) {
        (
            restaurant::Model { id: 1, name: "Karen's Pizza Shack".into(), address: "address1".into() },
            pizza::Model { id: 2, name: "Emma".into(), ingredients: "Dough, Tomato Sauce, Cheese".into() },
            restaurant_pizza::Model { id: 3, price: 15.0, restaurant_id: 1, pizza_id: 2 },
        )
    }

    #[test]
    fn restaurant_detail_lists_children_without_parents() {
        let (r, _, rp) = rows();
        let v = serde_json::to_value(RestaurantDetail::new(&r, &[rp])).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 1,
                "name": "Karen's Pizza Shack",
                "address": "address1",
                "restaurant_pizzas": [{"id": 3, "price": 15.0, "restaurant_id": 1, "pizza_id": 2}]
            })
        );
    }

    #[test]
    fn summary_has_no_children_key() {
        let (r, _, _) = rows();
        let v = serde_json::to_value(RestaurantSummary::from(&r)).unwrap();
        assert!(v.get("restaurant_pizzas").is_none());
    }

    #[test]
    fn restaurant_pizza_detail_embeds_shallow_parents() {
        let (r, p, rp) = rows();
        let v = serde_json::to_value(RestaurantPizzaDetail::new(&rp, &r, &p)).unwrap();
        assert_eq!(v["price"], json!(15.0));
        assert_eq!(v["restaurant"], json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"}));
        assert_eq!(v["pizza"], json!({"id": 2, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"}));
    }
}
