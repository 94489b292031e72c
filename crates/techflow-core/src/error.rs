//! Error Types
//!
//! Transport, form and data-shape errors surfaced to the views.

use thiserror::Error;

/// Failures of a request against the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Missing, expired or rejected token
    #[error("Session expired, please sign in again")]
    Unauthorized,

    /// Backend rejected the submitted fields
    #[error("{0}")]
    Validation(String),

    /// Stale identifier, e.g. deleting an already-deleted entity
    #[error("Not found")]
    NotFound,

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Map a non-success HTTP status and its body to an error.
    ///
    /// The backend reports human readable failures as `{"message": "..."}`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = backend_message(body);
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            400 | 422 => ApiError::Validation(
                message.unwrap_or_else(|| "The submitted data is invalid".to_string()),
            ),
            _ => ApiError::Server {
                status,
                message: message.unwrap_or_else(|| "request failed".to_string()),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Local data-shape anomaly found while aggregating a snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataAnomaly {
    #[error("task {task_id} has an unparseable due date {raw:?}")]
    UnparseableDueDate { task_id: String, raw: String },
}

/// Draft rejected before submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::Server { status: 500, message: "request failed".to_string() }
        );
    }

    #[test]
    fn test_validation_uses_backend_message() {
        let err = ApiError::from_status(422, r#"{"message":"Email already registered"}"#);
        assert_eq!(err, ApiError::Validation("Email already registered".to_string()));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_validation_without_message() {
        let err = ApiError::from_status(400, "not json");
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
