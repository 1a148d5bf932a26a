//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la flota y su conversión a respuestas
//! HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::scooter::{RideAction, ScooterStatus};

/// Errores de la store de la flota
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FleetError {
    #[error("scooter not found")]
    NotFound { id: String },

    #[error("scooter is {current}, cannot {action}")]
    Conflict {
        current: ScooterStatus,
        action: RideAction,
    },

    #[error("{0}")]
    InvalidRequest(String),

    /// Sólo al construir la store
    #[error("invalid scooter record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::BadRequest(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<FleetError> for AppError {
    fn from(err: FleetError) -> Self {
        let message = err.to_string();
        match err {
            FleetError::NotFound { .. } => AppError::NotFound(message),
            FleetError::Conflict { .. } => AppError::Conflict(message),
            FleetError::InvalidRequest(_) => AppError::BadRequest(message),
            FleetError::InvalidRecord { .. } => AppError::Internal(message),
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
