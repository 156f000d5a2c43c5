#![cfg(test)]
use std::sync::Arc;

use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

use crate::seed::{seed_if_empty, SeedIds};
use crate::store::SeaOrmStore;
use crate::RestaurantService;

/// Fresh in-memory SQLite database per call, migrated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seeded_store() -> Result<(SeaOrmStore, SeedIds), anyhow::Error> {
    let db = get_db().await?;
    let ids = seed_if_empty(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("fresh database was not empty"))?;
    Ok((SeaOrmStore::new(db), ids))
}

pub async fn seeded_service() -> Result<(RestaurantService<SeaOrmStore>, SeedIds), anyhow::Error> {
    let (store, ids) = seeded_store().await?;
    Ok((RestaurantService::new(Arc::new(store)), ids))
}
