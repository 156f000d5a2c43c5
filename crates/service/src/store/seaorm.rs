use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::debug;

use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::ServiceError;
use crate::store::EntityStore;

/// SeaORM-backed store.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Rolls back and reports "nothing deleted" when the parent row was already gone.
async fn finish_delete(txn: DatabaseTransaction, rows_affected: u64) -> Result<bool, ServiceError> {
    if rows_affected == 0 {
        txn.rollback().await?;
        return Ok(false);
    }
    txn.commit().await?;
    Ok(true)
}

#[async_trait]
impl EntityStore for SeaOrmStore {
    async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError> {
        Ok(restaurant::Entity::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn find_restaurant(&self, id: i32) -> Result<Option<restaurant::Model>, ServiceError> {
        Ok(restaurant::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn restaurant_pizzas_of(&self, restaurant_id: i32) -> Result<Vec<restaurant_pizza::Model>, ServiceError> {
        Ok(restaurant_pizza::Entity::find()
            .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(restaurant_pizza::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn delete_restaurant(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let children = restaurant_pizza::Entity::delete_many()
            .filter(restaurant_pizza::Column::RestaurantId.eq(id))
            .exec(&txn)
            .await?;
        let parent = restaurant::Entity::delete_by_id(id).exec(&txn).await?;
        debug!(restaurant_id = id, restaurant_pizzas = children.rows_affected, "cascade delete restaurant");
        finish_delete(txn, parent.rows_affected).await
    }

    async fn list_pizzas(&self) -> Result<Vec<pizza::Model>, ServiceError> {
        Ok(pizza::Entity::find()
            .order_by_asc(pizza::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn find_pizza(&self, id: i32) -> Result<Option<pizza::Model>, ServiceError> {
        Ok(pizza::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn delete_pizza(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let children = restaurant_pizza::Entity::delete_many()
            .filter(restaurant_pizza::Column::PizzaId.eq(id))
            .exec(&txn)
            .await?;
        let parent = pizza::Entity::delete_by_id(id).exec(&txn).await?;
        debug!(pizza_id = id, restaurant_pizzas = children.rows_affected, "cascade delete pizza");
        finish_delete(txn, parent.rows_affected).await
    }

    async fn find_restaurant_pizza(&self, id: i32) -> Result<Option<restaurant_pizza::Model>, ServiceError> {
        Ok(restaurant_pizza::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert_restaurant_pizza(&self, price: f64, restaurant_id: i32, pizza_id: i32) -> Result<restaurant_pizza::Model, ServiceError> {
        let txn = self.db.begin().await?;
        // Re-check inside the transaction so a concurrent delete surfaces as NotFound.
        if pizza::Entity::find_by_id(pizza_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Err(ServiceError::not_found("Pizza"));
        }
        if restaurant::Entity::find_by_id(restaurant_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Err(ServiceError::not_found("Restaurant"));
        }
        let created = restaurant_pizza::create(&txn, price, restaurant_id, pizza_id).await?;
        txn.commit().await?;
        Ok(created)
    }
}
