// Error taxonomy for daemon communication
//
// Transport, protocol and payload failures are kept apart so callers can
// react to each: a connection error means the daemon is down, an API error
// means the daemon rejected the request, a decode error means the client
// and daemon disagree about the response schema.

use reqwest::StatusCode;
use thiserror::Error;

use super::types::ErrorEnvelope;

/// Failure modes of a daemon API call
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (refused, reset, timed out)
    #[error("error while connecting to daemon: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The daemon answered with a non-success status
    #[error("daemon returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// A success response whose body did not match the expected schema
    #[error("failed to decode daemon response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_connection(&self) -> bool {
        matches!(self, ClientError::Connection { .. })
    }
}

/// Translate a non-success response body into an API error.
///
/// The daemon reports failures as `{"errors": ["..."]}`. Anything else
/// (empty body, HTML from a proxy, truncated JSON) falls back to a generic
/// message carrying the status code.
pub fn process_error_body(status: StatusCode, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => ClientError::Api {
            status,
            message: envelope.errors.join("; "),
        },
        _ => ClientError::Api {
            status,
            message: format!("unexpected response status {}", status),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_messages_are_joined() {
        let err = process_error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"errors":["store unavailable","scheduler stalled"]}"#,
        );
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "store unavailable; scheduler stalled");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_body_falls_back_to_status() {
        let bodies: [&[u8]; 4] = [b"", b"not-json", b"{}", br#"{"errors":[]}"#];
        for body in bodies {
            let err = process_error_body(StatusCode::SERVICE_UNAVAILABLE, body);
            match err {
                ClientError::Api { status, message } => {
                    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                    assert!(message.contains("503"), "message was: {}", message);
                }
                other => panic!("expected Api error, got {:?}", other),
            }
        }
    }
}
