use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use shiftsync_core::calendar::ScopeError;
use shiftsync_core::session::ErrorResponse;
use shiftsync_core::storage::{repository_error_to_status_code, RepositoryError};

/// A request the endpoint refuses before touching storage.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Неверный ключ доступа")]
    InvalidKey,
    #[error("Только админ может сохранять данные")]
    AdminOnly,
    #[error("Некорректный месяц или год: {0}")]
    InvalidScope(String),
    #[error("Некорректный формат данных")]
    InvalidPayload,
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidKey => StatusCode::UNAUTHORIZED,
            Self::AdminOnly => StatusCode::FORBIDDEN,
            Self::InvalidScope(_) | Self::InvalidPayload => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<ScopeError> for RequestError {
    fn from(error: ScopeError) -> Self {
        Self::InvalidScope(error.to_string())
    }
}

/// Application error type that wraps `anyhow::Error`.
///
/// Known causes pick the status code; every response body is `{"error": ...}`.
/// Server-side failures hide their details from the caller.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(request_error) = self.0.downcast_ref::<RequestError>() {
            request_error.status()
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, "Application error");
            "Internal Server Error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
