//! ps2 version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The ps2 version string (for example, `0.1.0`).
pub const PS2_VERSION: &str = env!("CARGO_PKG_VERSION");
