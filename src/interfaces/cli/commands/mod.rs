//! CLI command implementations

pub mod config_management;
pub mod levels;
pub mod write;

pub use config_management::{config_generate, config_show};
pub use levels::list_levels;
pub use write::write_entry;
