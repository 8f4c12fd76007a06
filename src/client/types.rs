// Wire types for the kestreld control API
//
// These mirror the daemon's /healthz response contract. The daemon owns
// the schema; the client only needs to deserialize it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Health verdict for a single daemon subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
    Degraded,
    Failure,
    Disabled,
}

impl HealthState {
    /// Label used in formatted CLI output
    pub fn label(&self) -> &'static str {
        match self {
            HealthState::Ok => "ok",
            HealthState::Degraded => "degraded",
            HealthState::Failure => "failure",
            HealthState::Disabled => "disabled",
        }
    }
}

/// Health report for one subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemHealth {
    /// Current verdict
    pub state: HealthState,

    /// Optional operator-facing detail (e.g. "reconnecting to store")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Aggregated daemon status returned by GET /healthz
///
/// `daemon` is the only required field. Which subsystems appear depends on
/// what the daemon has enabled, so everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Overall daemon verdict (e.g. "OK", "Degraded")
    pub daemon: String,

    /// Seconds since the daemon started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,

    /// Per-subsystem health, keyed by subsystem name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subsystems: BTreeMap<String, SubsystemHealth>,
}

/// Error envelope the daemon uses on non-success responses
///
/// Contract: `{"errors": ["..."]}`. Bodies that do not parse as this
/// envelope are treated as unrecognized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_minimal_body() {
        let status: StatusResponse = serde_json::from_str(r#"{"daemon":"OK"}"#).unwrap();
        assert_eq!(status.daemon, "OK");
        assert_eq!(status.uptime_seconds, None);
        assert!(status.subsystems.is_empty());
    }

    #[test]
    fn test_status_response_requires_daemon_field() {
        let result = serde_json::from_str::<StatusResponse>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_health_state_is_lowercase_on_the_wire() {
        let health: SubsystemHealth =
            serde_json::from_str(r#"{"state":"degraded","message":"compacting"}"#).unwrap();
        assert_eq!(health.state, HealthState::Degraded);
        assert_eq!(health.message.as_deref(), Some("compacting"));

        // Unknown states are a schema mismatch, not a silent default
        assert!(serde_json::from_str::<SubsystemHealth>(r#"{"state":"sideways"}"#).is_err());
    }

    #[test]
    fn test_error_envelope_tolerates_missing_errors_key() {
        let envelope: ErrorEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.errors.is_empty());
    }
}
