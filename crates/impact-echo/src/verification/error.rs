use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// Broad classes of failure surfaced by the verification endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationErrorKind {
    /// The request body could not be decoded into a submission.
    MalformedPayload,
    /// The image endpoint was called without a `file` part.
    MissingAttachment,
    /// Scoring itself failed.
    Internal,
}

impl VerificationErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            VerificationErrorKind::MalformedPayload | VerificationErrorKind::MissingAttachment => {
                StatusCode::BAD_REQUEST
            }
            VerificationErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error raised instead of a partial verification result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct VerificationError {
    pub kind: VerificationErrorKind,
    pub message: String,
}

impl VerificationError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: VerificationErrorKind::MalformedPayload,
            message: message.into(),
        }
    }

    pub fn missing_attachment(message: impl Into<String>) -> Self {
        Self {
            kind: VerificationErrorKind::MissingAttachment,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: VerificationErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl IntoResponse for VerificationError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();
        let payload = match self.kind {
            VerificationErrorKind::MissingAttachment => json!({ "error": self.message }),
            VerificationErrorKind::MalformedPayload | VerificationErrorKind::Internal => json!({
                "error": "Verification failed",
                "message": self.message,
                "status": "error",
            }),
        };
        (status, Json(payload)).into_response()
    }
}
