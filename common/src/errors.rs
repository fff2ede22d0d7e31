//! Application error types.
//!
//! All fallible operations return [`AppResult`]; handlers convert errors
//! into the unified JSON response format via `IntoResponse`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::response::ApiResponse;

/// Result alias used throughout the services.
pub type AppResult<T> = Result<T, AppError>;

/// Application error kinds.
#[derive(Debug, Error)]
pub enum AppError {
    /// The database service could not be reached or rejected the credentials.
    #[error("database connection failed: {0}")]
    DatabaseConnection(String),

    /// A database reported moments earlier could not be selected.
    #[error("database selection failed: {0}")]
    DatabaseSelection(String),

    /// A metadata query failed on an established connection.
    #[error("database query failed: {0}")]
    DatabaseQuery(String),

    /// An HTML template failed to render.
    #[error("template rendering failed: {0}")]
    Template(String),
}

impl AppError {
    /// HTTP status the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseConnection(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseSelection(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseQuery(_) => StatusCode::BAD_GATEWAY,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code for clients.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::DatabaseConnection(_) => "DATABASE_CONNECTION",
            AppError::DatabaseSelection(_) => "DATABASE_SELECTION",
            AppError::DatabaseQuery(_) => "DATABASE_QUERY",
            AppError::Template(_) => "TEMPLATE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiResponse::err(self.error_code(), self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_map_to_bad_gateway() {
        let err = AppError::DatabaseConnection("refused".into());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_code(), "DATABASE_CONNECTION");
    }

    #[test]
    fn template_errors_are_internal() {
        let err = AppError::Template("missing field".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_includes_cause() {
        let err = AppError::DatabaseSelection("shop: unknown database".into());
        assert_eq!(
            err.to_string(),
            "database selection failed: shop: unknown database"
        );
    }
}
