use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::{ErrorBody, ErrorsBody};
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Handler error; the variant decides the status and the body shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be read as the expected JSON.
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody::new(vec![msg]))).into_response()
            }
            ApiError::Service(ServiceError::Validation(msg))
            | ApiError::Service(ServiceError::Model(ModelError::Validation(msg))) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody::new(vec![msg]))).into_response()
            }
            ApiError::Service(ServiceError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::new(msg))).into_response()
            }
            ApiError::Service(e) => {
                let msg = e.to_string();
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(msg))).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to bind {0}: {1}")]
    Bind(std::net::SocketAddr, #[source] std::io::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
