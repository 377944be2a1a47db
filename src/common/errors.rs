use super::models::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use std::fmt;

/// Errors surfaced to API clients
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be read: malformed body or path identifier (400 Bad Request)
    BadRequest {
        error: String,
        details: Option<String>,
    },
    /// A field of an otherwise well-formed payload broke a rule (400 Bad Request)
    ValidationError { field: String, message: String },
    /// Resource not found (404 Not Found)
    NotFound { resource: String, id: String },
    /// The store failed to carry out the request (500 Internal Server Error)
    StorageError { context: String, source: DbErr },
}

impl ApiError {
    pub fn bad_request(error: &str, details: Option<String>) -> Self {
        ApiError::BadRequest {
            error: error.to_string(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::StorageError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_body(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest { error, details } => ErrorResponse {
                error: error.clone(),
                details: details.clone(),
            },
            ApiError::ValidationError { field, message } => ErrorResponse {
                error: "Validation failed".to_string(),
                details: Some(format!("{field}: {message}")),
            },
            ApiError::NotFound { resource, id } => ErrorResponse {
                error: "Not found".to_string(),
                details: Some(format!("{resource} with id '{id}' not found")),
            },
            ApiError::StorageError { context, source } => ErrorResponse {
                error: context.clone(),
                details: Some(source.to_string()),
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { error, details } => match details {
                Some(details) => write!(f, "{error}: {details}"),
                None => write!(f, "{error}"),
            },
            ApiError::ValidationError { field, message } => {
                write!(f, "Validation error in field '{field}': {message}")
            }
            ApiError::NotFound { resource, id } => {
                write!(f, "{resource} with id '{id}' not found")
            }
            ApiError::StorageError { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::StorageError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("Rejected request: {self}");
        }

        (status, Json(self.to_body())).into_response()
    }
}

#[macro_export]
macro_rules! validation_error {
    ($field:expr, $message:expr) => {
        $crate::common::errors::ApiError::ValidationError {
            field: $field.to_string(),
            message: $message.to_string(),
        }
    };
}

#[macro_export]
macro_rules! not_found {
    ($resource:expr, $id:expr) => {
        $crate::common::errors::ApiError::NotFound {
            resource: $resource.to_string(),
            id: $id.to_string(),
        }
    };
}

/// Extension trait to wrap a `DbErr` with the message shown to the client
pub trait DbErrorExt {
    fn to_api_error(self, context: &str) -> ApiError;
}

impl DbErrorExt for DbErr {
    fn to_api_error(self, context: &str) -> ApiError {
        ApiError::StorageError {
            context: context.to_string(),
            source: self,
        }
    }
}

/// Result type alias for service operations
pub type ApiResult<T> = Result<T, ApiError>;
