//! Terminal output utilities
//!
//! All diagnostics go to stderr. Stdout carries only the link-order report
//! so the tool stays safe to pipe into build scripts.

use console::style;

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print an info message to stderr
pub fn print_info(message: &str) {
    eprintln!("{}: {}", style("info").blue().bold(), message);
}
