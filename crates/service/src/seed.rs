//! Sample catalogue for local runs and tests.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::info;

use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::ServiceError;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const PRICES: [(usize, usize, f64); 3] = [(0, 0, 10.0), (0, 1, 12.0), (1, 2, 8.0)];

/// Ids of the seeded rows, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SeedIds {
    pub restaurants: Vec<i32>,
    pub pizzas: Vec<i32>,
    pub restaurant_pizzas: Vec<i32>,
}

/// Seeds in one transaction when both parent tables are empty; `None` otherwise.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<Option<SeedIds>, ServiceError> {
    let existing = restaurant::Entity::find().count(db).await? + pizza::Entity::find().count(db).await?;
    if existing > 0 {
        info!(existing, "skip seeding: tables not empty");
        return Ok(None);
    }

    let txn = db.begin().await?;
    let mut ids = SeedIds::default();
    for (name, address) in RESTAURANTS {
        ids.restaurants.push(restaurant::create(&txn, name, address).await?.id);
    }
    for (name, ingredients) in PIZZAS {
        ids.pizzas.push(pizza::create(&txn, name, ingredients).await?.id);
    }
    for (r, p, price) in PRICES {
        let rp = restaurant_pizza::create(&txn, price, ids.restaurants[r], ids.pizzas[p]).await?;
        ids.restaurant_pizzas.push(rp.id);
    }
    txn.commit().await?;

    info!(restaurants = ids.restaurants.len(), pizzas = ids.pizzas.len(), restaurant_pizzas = ids.restaurant_pizzas.len(), "seeded database");
    Ok(Some(ids))
}
