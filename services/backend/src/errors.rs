use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::errors::ServiceError;
use shared::ValidationError;

use crate::domain::{BetError, DrawError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid draw length: {0}")]
    InvalidDrawLength(#[from] DrawError),

    #[error("Invalid bet: {0}")]
    InvalidBet(#[from] BetError),

    #[error("Identity generation failed: {0}")]
    IdentityGeneration(String),

    #[error("Clock failure: {0}")]
    Clock(String),

    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid bet id: {0}")]
    InvalidBetId(ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    /// Standardized representation shared with other services
    pub fn to_service_error(&self) -> ServiceError {
        match self {
            AppError::InvalidDrawLength(e) => ServiceError::invalid_draws(e),
            AppError::InvalidBet(e) => ServiceError::invalid_input(e.to_string()),
            AppError::IdentityGeneration(e) => ServiceError::identity_generation_failure(e),
            AppError::Clock(e) => ServiceError::clock_failure(e),
            AppError::Persistence(e) => ServiceError::persistence_failure(e),
            AppError::Redis(e) => ServiceError::redis_error(e),
            AppError::NotFound(msg) => ServiceError::bet_not_found(msg),
            AppError::InvalidInput(msg) => ServiceError::invalid_input(msg.clone()),
            AppError::InvalidBetId(e) => ServiceError::invalid_bet_id(e),
            AppError::Serialization(e) => ServiceError::serialization_error(e),
            AppError::Deserialization(e) => ServiceError::deserialization_error(e),
            AppError::Internal(e) => ServiceError::internal("Internal server error")
                .with_context(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = self.to_service_error();

        match error.category.log_level() {
            "error" => tracing::error!(error_code = %error.code, "{:?}", self),
            "warn" => {
                tracing::warn!(error_code = %error.code, error_message = %error.message, "Request rejected")
            }
            "info" => {
                tracing::info!(error_code = %error.code, error_message = %error.message, "Resource not found")
            }
            _ => tracing::debug!(error_code = %error.code, error_message = %error.message, "Request failed"),
        }

        metrics::counter!(
            "errors_total",
            "category" => error.category.as_str(),
            "code" => error.code.clone()
        )
        .increment(1);

        let status = StatusCode::from_u16(error.category.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side details stay in the logs
        let body = Json(json!({
            "error": {
                "code": error.code,
                "message": error.message,
                "category": error.category.as_str(),
            }
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
