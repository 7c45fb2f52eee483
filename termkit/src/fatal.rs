//! Fatal error channel.
//!
//! Used for conditions the caller has no way to recover from. The message is
//! logged, written to stderr, and the process exits with
//! [`exit_codes::FATAL`](crate::exit_codes::FATAL).

use std::io::Write;
use std::process;

use tracing::error;

use crate::exit_codes;

/// Render the diagnostic line written to stderr for `message`.
pub fn diagnostic(message: &str) -> String {
    format!("Fatal error: {message}")
}

/// Report `message` and terminate the process. Never returns.
pub fn fatal_error(message: &str) -> ! {
    error!(reason = message, "fatal error, terminating");
    let mut stderr = std::io::stderr().lock();
    // Nothing left to report a failed write to.
    let _ = writeln!(stderr, "{}", diagnostic(message));
    let _ = stderr.flush();
    process::exit(exit_codes::FATAL)
}
