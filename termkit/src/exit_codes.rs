//! Stable exit codes for the termkit CLI.

/// Command succeeded, or the user answered yes/True.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments/config, an I/O error, or closed input.
pub const INVALID: i32 = 1;
/// `termkit confirm` or `termkit boolean` was answered no/False.
pub const DECLINED: i32 = 2;
/// The process was terminated through the fatal error channel (e.g. out of memory).
pub const FATAL: i32 = 3;
