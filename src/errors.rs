// User-friendly error messages
//
// Provides helpers to convert classified client errors into actionable
// messages that guide operators toward solutions.

/// Format a connection refused error with helpful suggestions
pub fn connection_refused_error(address: &str) -> String {
    format!(
        "Could not connect to daemon at {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Daemon is not running\n\
        • Daemon crashed or failed to start\n\
        • Wrong bind address\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Start the daemon:\n\
           \x1b[36mkestreld --bind {}\x1b[0m\n\n\
        2. Check daemon logs:\n\
           \x1b[36mtail -f ~/.kestrel/kestreld.log\x1b[0m\n\n\
        3. Check if the daemon process is alive:\n\
           \x1b[36mps aux | grep kestreld\x1b[0m",
        address, address
    )
}

/// Format a response-schema mismatch error with helpful suggestions
pub fn schema_mismatch_error(detail: &impl std::fmt::Display) -> String {
    format!(
        "Daemon sent a status response this client could not decode\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Client and daemon versions are out of sync\n\
        • Another service is listening on the daemon's port\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Compare versions:\n\
           \x1b[36mkestrel --version\x1b[0m and \x1b[36mkestreld --version\x1b[0m\n\n\
        2. Check what is bound to the daemon address:\n\
           \x1b[36mlsof -i -P | grep LISTEN\x1b[0m",
        detail
    )
}
