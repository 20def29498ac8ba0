use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Every failure is caused by the request, so all variants map to 400.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid value for header {name}: {value:?}")]
    InvalidHeader { name: &'static str, value: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        debug!(error = %message, "Rejecting request");

        let body = Json(json!({
            "error": message,
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_is_a_bad_request() {
        for err in [
            AppError::InvalidInput("max_pages must be at most 50".into()),
            AppError::InvalidLocation("projects".into()),
            AppError::InvalidHeader {
                name: "total",
                value: "lots".into(),
            },
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_header_error_message() {
        let err = AppError::InvalidHeader {
            name: "page",
            value: "-1".into(),
        };
        assert_eq!(err.to_string(), r#"Invalid value for header page: "-1""#);
    }
}
