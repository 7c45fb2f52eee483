//! Console interaction and guarded allocation helpers.
//!
//! Two independent leaf modules:
//!
//! - **[`console`]**: formatted printing to stdout/stderr, a blocking line
//!   reader (with an optional `rustyline` editing backend), and choice
//!   prompts that re-ask until a valid answer is given.
//! - **[`memory`]**: zero-filled heap buffers whose allocation failures
//!   terminate the process through the [`fatal`] channel instead of being
//!   returned.
//!
//! Supporting modules: [`config`] for the optional TOML settings,
//! [`logging`] for the `tracing` subscriber, and [`exit_codes`] for the CLI.

pub mod config;
pub mod console;
pub mod exit_codes;
pub mod fatal;
pub mod logging;
pub mod memory;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
