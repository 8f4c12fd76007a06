// Local daemon observation
//
// Utilities for inspecting the locally installed kestreld process from
// the client side. Starting and stopping the daemon is its own job.

pub mod pidfile;

pub use pidfile::PidFile;
