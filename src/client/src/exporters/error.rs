use exlog_common::{ErrorPayload, NativeError};
use serde_json::{json, Value};
use thiserror::Error;

/// Failure of the remote log operation.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Failed to serialize the envelope
    #[error("Failed to serialize log envelope: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network request failed
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server returned a non-2XX status code
    #[error("Server error {status}: {body}")]
    Server {
        status: u16,
        status_text: String,
        body: Value,
    },

    /// The log operation refused the envelope with an opaque value
    #[error("Log call rejected: {0}")]
    Rejected(Value),
}

impl SubmitError {
    /// Create a server error, keeping the body as JSON when it parses.
    pub fn server_error(status: u16, status_text: &str, body: &str) -> Self {
        let body = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        SubmitError::Server {
            status,
            status_text: status_text.to_string(),
            body,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            SubmitError::Serialization(_) => "SerializationError",
            SubmitError::Network(_) => "NetworkError",
            SubmitError::Server { .. } => "ServerError",
            SubmitError::Rejected(_) => "RejectedError",
        }
    }

    /// The failure as something the reporter can log. Never unclassified.
    pub fn into_payload(self) -> ErrorPayload {
        let name = self.variant_name();
        match self {
            SubmitError::Server {
                status,
                status_text,
                body,
            } => ErrorPayload::classify(json!({
                "status": status,
                "statusText": status_text,
                "body": body,
            })),
            SubmitError::Rejected(value) => match ErrorPayload::classify(value) {
                ErrorPayload::Unclassified(value) => {
                    ErrorPayload::Native(NativeError::new(name, &value.to_string()))
                }
                payload => payload,
            },
            other => ErrorPayload::Native(NativeError::from_error(name, &other)),
        }
    }
}
