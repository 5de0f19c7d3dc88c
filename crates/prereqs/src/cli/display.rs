//! Shared display helpers for CLI output.

use colored::Colorize;
use prereqs::LoadWarning;

/// Print load warnings to stderr, one per line.
pub fn print_warnings(warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!("{}: {warning}", "warning".yellow().bold());
    }
}
