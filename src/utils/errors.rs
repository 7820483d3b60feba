//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl ErrorResponse {
    fn new(error: &str, message: String, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message,
            details: None,
            code: code.to_string(),
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Database Error",
                        "An error occurred while accessing the database".to_string(),
                        "DB_ERROR",
                    ),
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "Validation Error",
                        "The provided data is invalid".to_string(),
                        "VALIDATION_ERROR",
                    )
                    .with_details(json!(e)),
                )
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("🔒 Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("Unauthorized", msg, "UNAUTHORIZED"),
                )
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("🚫 Forbidden access: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new("Forbidden", msg, "FORBIDDEN"),
                )
            }

            AppError::NotFound(msg) => {
                tracing::debug!("🔍 Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Not Found", msg, "NOT_FOUND"),
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("⚠️ Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new("Conflict", msg, "CONFLICT"),
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Bad Request", msg, "BAD_REQUEST"),
                )
            }

            AppError::Jwt(msg) => {
                tracing::warn!("🔒 JWT error: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("JWT Error", msg, "JWT_ERROR"),
                )
            }

            AppError::Hash(msg) => {
                tracing::error!("❌ Hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Hash Error",
                        "An error occurred while processing credentials".to_string(),
                        "HASH_ERROR",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

/// Función helper para crear errores de acceso prohibido
pub fn forbidden_error(operation: &str, reason: &str) -> AppError {
    AppError::Forbidden(format!("Cannot {}: {}", operation, reason))
}

/// Mapear violaciones de unicidad de Postgres a conflicto
pub fn map_unique_violation(e: sqlx::Error, resource: &str, field: &str, value: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            conflict_error(resource, field, value)
        }
        _ => AppError::Database(e),
    }
}

/// Mapear referencias inexistentes (claves foráneas) a request incorrecto
pub fn map_foreign_key_violation(e: sqlx::Error, message: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::BadRequest(message.to_string())
        }
        _ => AppError::Database(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (not_found_error("Call", "1"), StatusCode::NOT_FOUND),
            (conflict_error("User", "username", "a"), StatusCode::CONFLICT),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Jwt("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Hash("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_forbidden_message() {
        let error = forbidden_error("delete call", "not the owner");
        assert_eq!(error.to_string(), "Forbidden: Cannot delete call: not the owner");
    }
}
