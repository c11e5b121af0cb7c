use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rasp_core::RelayError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<RelayError>() {
            Some(RelayError::InvalidReport(_)) => StatusCode::BAD_REQUEST,
            Some(
                RelayError::UnrecognizedPayload(_)
                | RelayError::UnexpectedEventType(_)
                | RelayError::InvalidConfig(_)
                | RelayError::Io(_)
                | RelayError::Yaml(_)
                | RelayError::Json(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self.0, "request failed");
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
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
