//! Logging setup for the `mueller` binary.
//!
//! Library code emits `tracing` events (and `log` records from the config
//! loader); nothing is printed until the binary installs a subscriber with
//! [`init_tracing`]. Output goes to stderr so stdout only carries results.

pub mod tracing;

pub use self::tracing::{default_directive, init_tracing, LOG_ENV_VAR};
