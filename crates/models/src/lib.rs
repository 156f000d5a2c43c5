//! SeaORM entities for restaurants, pizzas and the priced join between them,
//! plus the model-level validation every write goes through.

pub mod errors;
pub mod db;
pub mod restaurant;
pub mod pizza;
pub mod restaurant_pizza;

#[cfg(test)]
mod tests;
