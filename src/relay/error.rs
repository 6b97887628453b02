//! Relay error taxonomy and response mapping.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while relaying a single request.
///
/// Every variant is terminal for the call being handled; nothing is retried
/// and no state carries over to later calls.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Outer envelope was not valid JSON or had wrong field types.
    #[error("invalid envelope: {0}")]
    EnvelopeDecode(#[source] serde_json::Error),

    /// Inner payload did not decode into a forward spec.
    #[error("invalid forward spec: {0}")]
    SpecDecode(#[source] serde_json::Error),

    /// Method, URL, or a header could not be turned into a request.
    #[error("failed to construct request: {0}")]
    Construction(String),

    /// Transport-level failure executing the outbound request.
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] reqwest::Error),
}

impl RelayError {
    /// Status code returned to the original caller.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::EnvelopeDecode(_) | RelayError::SpecDecode(_) => StatusCode::BAD_REQUEST,
            RelayError::Construction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Dispatch(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Fixed message exposed to the caller. Decode details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::EnvelopeDecode(_) => "Invalid JSON format",
            RelayError::SpecDecode(_) => "Invalid request format",
            RelayError::Construction(_) => "Failed to create request",
            RelayError::Dispatch(_) => "Failed to forward request",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn envelope_decode_maps_to_bad_request() {
        let err = RelayError::EnvelopeDecode(json_error());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid JSON format");
    }

    #[test]
    fn spec_decode_maps_to_bad_request() {
        let err = RelayError::SpecDecode(json_error());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid request format");
    }

    #[test]
    fn construction_maps_to_internal_error() {
        let err = RelayError::Construction("bad method".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to create request");
    }

    #[test]
    fn public_message_hides_decode_details() {
        let err = RelayError::EnvelopeDecode(json_error());
        assert!(!err.public_message().contains("line"));
    }
}
