//! Levels command

use colored::Colorize;
use strum::IntoEnumIterator;

use crate::logger::Priority;

/// Print every priority, lowest first.
pub fn list_levels() {
    println!("{}", "Priority levels (lowest to highest):".bold());
    for priority in Priority::iter() {
        let name = priority.to_string();
        let name = match priority {
            Priority::None => name.dimmed(),
            Priority::Info | Priority::Trace | Priority::Debug => name.cyan(),
            Priority::Warn => name.yellow(),
            Priority::Err => name.red(),
        };
        println!("  {} {}", priority.value(), name);
    }
    println!(
        "  {}",
        "NONE is never written; a NONE threshold lets every other level through.".dimmed()
    );
}
