//! Configuration management
//!
//! Settings come from an optional TOML file and `S3LOG__*` environment
//! overrides, merged with the `config` crate.

mod structs;

pub use structs::*;
