// HTTP client for daemon communication
//
// Provides DaemonClient for querying the kestreld control API and the
// error taxonomy its callers match on.

mod daemon_client;
mod error;
mod types;

pub use daemon_client::{DaemonClient, DaemonConfig};
pub use error::{process_error_body, ClientError};
pub use types::{ErrorEnvelope, HealthState, StatusResponse, SubsystemHealth};
