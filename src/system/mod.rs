//! System-level modules
//!
//! Process-wide setup used by the `s3log` binary.

#[cfg(feature = "cli")]
pub mod diagnostics;
