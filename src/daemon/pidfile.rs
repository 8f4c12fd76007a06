// Daemon PID file observation
//
// The daemon writes ~/.kestrel/kestreld.pid on startup; this side only
// reads it to tell the operator whether a local daemon process exists.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Read-only view of the daemon's PID file
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// PID file at the default location (~/.kestrel/kestreld.pid)
    pub fn new() -> Result<Self> {
        let path = dirs::home_dir()
            .context("Cannot determine home directory")?
            .join(".kestrel")
            .join("kestreld.pid");

        Ok(Self { path })
    }

    /// PID file at an explicit location
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Check if a daemon process is currently running
    ///
    /// Returns true if:
    /// - PID file exists
    /// - PID can be parsed
    /// - Process with that PID exists
    pub fn is_running(&self) -> bool {
        if !self.path.exists() {
            return false;
        }

        match self.read_pid() {
            Ok(pid) => process_exists(pid),
            Err(_) => false,
        }
    }

    /// Read PID from file
    pub fn read_pid(&self) -> Result<u32> {
        let pid_str = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read PID file: {}", self.path.display()))?;
        pid_str
            .trim()
            .parse()
            .with_context(|| format!("Invalid PID in file: {}", pid_str))
    }

    /// Get PID file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

/// Check if a process with the given PID exists
#[cfg(target_family = "unix")]
fn process_exists(pid: u32) -> bool {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    // kill with NULL signal checks existence without affecting the process
    kill(Pid::from_raw(pid as i32), None).is_ok()
}

// Liveness probing is Unix-only; elsewhere a parseable PID file is taken
// at its word.
#[cfg(not(target_family = "unix"))]
fn process_exists(_pid: u32) -> bool {
    true
}
