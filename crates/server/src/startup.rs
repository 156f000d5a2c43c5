use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

/// Connect, migrate and optionally seed, then wrap the connection in handler state.
pub async fn build_state(database: &DatabaseConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    if database.seed {
        service::seed::seed_if_empty(&db).await?;
    }
    Ok(ServerState::new(db))
}

/// Router with the same layers `run` serves.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(&cfg.database).await?;
    Ok(routes::build_router(state, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Serve the API described by an already loaded configuration until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let addr = load_bind_addr(&cfg.server)?;
    let app = build_app(&cfg).await?;

    info!(%addr, "starting pizza api");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Bind(addr, e))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let ok = ServerConfig { host: "127.0.0.1".into(), port: 5555, worker_threads: None };
        assert_eq!(load_bind_addr(&ok).unwrap().port(), 5555);

        let bad = ServerConfig { host: "not a host".into(), port: 5555, worker_threads: None };
        assert!(matches!(load_bind_addr(&bad), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn run_reports_unreachable_database() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite:///no/such/dir/pizza.db".into();
        cfg.server.port = 0;
        assert!(matches!(run(cfg).await, Err(StartupError::Any(_))));
    }

    #[tokio::test]
    async fn run_rejects_bad_bind_address_before_connecting() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(run(cfg).await, Err(StartupError::InvalidConfig(_))));
    }
}
