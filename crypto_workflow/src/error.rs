// crypto_demo/crypto_workflow/src/error.rs

use thiserror::Error;

/// Failure talking to the remote cryptographic service.
///
/// Orchestrators never return these to their callers; they log them and
/// store the placeholder of the field being computed instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Connection refused, DNS failure, reset, client timeout.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    /// The body was not the JSON object the endpoint promises.
    #[error("{endpoint} returned an unreadable body: {reason}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },
}

impl ServiceError {
    /// Endpoint that produced the error.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServiceError::Transport { endpoint, .. }
            | ServiceError::Status { endpoint, .. }
            | ServiceError::Decode { endpoint, .. } => endpoint,
        }
    }
}
