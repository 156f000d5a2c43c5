use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, restaurant};

pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 30.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Restaurant, Pizza }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .on_delete(sea_orm::sea_query::ForeignKeyAction::Cascade)
                .into(),
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .on_delete(sea_orm::sea_query::ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Restaurant.def() }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pizza.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Last line of defence for the price range; rejects the write before it reaches the database.
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(price) | ActiveValue::Unchanged(price) = &self.price {
            validate_price(*price).map_err(|e| DbErr::Custom(format!("{e} (insert: {insert})")))?;
        }
        Ok(self)
    }
}

/// Accepts `MIN_PRICE..=MAX_PRICE`; NaN is rejected.
pub fn validate_price(price: f64) -> Result<f64, errors::ModelError> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        return Err(errors::ModelError::Validation(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}"
        )));
    }
    Ok(price)
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    price: f64,
    restaurant_id: i32,
    pizza_id: i32,
) -> Result<Model, errors::ModelError> {
    let price = validate_price(price)?;
    let am = ActiveModel {
        price: Set(price),
        restaurant_id: Set(restaurant_id),
        pizza_id: Set(pizza_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
