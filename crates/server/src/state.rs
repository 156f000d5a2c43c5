use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{store::SeaOrmStore, RestaurantService};

/// Shared by every handler; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub restaurants: Arc<RestaurantService<SeaOrmStore>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let store = Arc::new(SeaOrmStore::new(db));
        Self { restaurants: Arc::new(RestaurantService::new(store)) }
    }
}
