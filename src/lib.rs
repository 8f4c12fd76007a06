// Kestrel - control-plane client for the kestreld supervision daemon
// Library exports

pub mod client; // HTTP client for daemon communication
pub mod config;
pub mod daemon; // Local daemon process observation
pub mod errors;
