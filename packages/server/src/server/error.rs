//! Error responses for the JSON API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use partscout::ScoutError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error: bad input maps to 400, everything else to 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Scout(#[from] ScoutError),

    /// Malformed request (unreadable body, missing upload)
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Scout(e) if e.is_input_error() => StatusCode::BAD_REQUEST,
            ApiError::Scout(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let invalid = ApiError::from(ScoutError::InvalidBatch {
            reason: "too many".into(),
        });
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let blank = ApiError::from(ScoutError::InvalidPart {
            reason: "blank".into(),
        });
        assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from(ScoutError::MissingCredential {
            name: "GEMINI_API_KEY",
        });
        assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(
            ApiError::bad_request("no file").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_message_passes_through() {
        let err = ApiError::from(ScoutError::EmptyReply);
        assert_eq!(err.to_string(), "model returned an empty reply");
    }
}
