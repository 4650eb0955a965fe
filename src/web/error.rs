//! Error responses.
//!
//! JSON routes answer `{"error": "<message>"}`; page routes render an
//! HTML error page. Both use the status from [`ErrorKind::status_code`].

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::{ErrorKind, StorefrontError};

use super::html;

impl ErrorKind {
    /// HTTP status reported for this kind of error.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::Remote => StatusCode::BAD_GATEWAY,
        }
    }
}

fn log_error(error: &StorefrontError, status: StatusCode) {
    if status.is_server_error() {
        tracing::warn!(%error, status = status.as_u16(), "request failed");
    } else {
        tracing::debug!(%error, status = status.as_u16(), "request rejected");
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.kind().status_code();
        log_error(&self, status);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// A [`StorefrontError`] rendered as an HTML page, for the page routes.
#[derive(Debug)]
pub struct HtmlError(
    /// The underlying error.
    pub StorefrontError,
);

impl From<StorefrontError> for HtmlError {
    fn from(error: StorefrontError) -> Self {
        Self(error)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let status = self.0.kind().status_code();
        log_error(&self.0, status);
        (
            status,
            Html(html::error_page(status.as_u16(), &self.0.to_string())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::QueueError;

    #[test]
    fn test_status_codes_per_kind() {
        assert_eq!(ErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::InvalidArgument.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::Remote.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_json_error_response_status() {
        let response = StorefrontError::not_found("x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = StorefrontError::from(QueueError::MissingData).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_html_error_response_status() {
        let response = HtmlError(StorefrontError::invalid_argument("limit", "x", "bad"))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
