use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Closed set of failures a user operation can surface. Callers branch on the
/// variant, never on the message text.
#[derive(Debug, Error)]
pub enum UserError {
    /// Caller-supplied input is malformed or breaks a business rule.
    #[error("{0}")]
    Validation(String),
    /// A lookup or delete targeted an id that holds no row.
    #[error("{0}")]
    NotFound(String),
    /// Anything that went wrong below the service.
    #[error("{0}")]
    Database(String),
}

impl UserError {
    pub fn status(&self) -> StatusCode {
        match self {
            UserError::Validation(_) => StatusCode::BAD_REQUEST,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_statuses() {
        assert_eq!(
            UserError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::NotFound("gone".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            UserError::Database("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_survives_display() {
        let err = UserError::Validation("Email already exists".into());
        assert_eq!(err.to_string(), "Email already exists");
    }
}
