//! Output formatting and styling for the majortom CLI.
//!
//! - [`palette`]: semantic color roles rendered for the active color depth
//! - [`listing`]: the shortcut table
//! - status helpers for one-line messages on stderr

pub mod listing;
pub mod palette;

use colored::Colorize;

pub use listing::{ListingRow, listing_rows, render_listing};
pub use palette::{ColorMode, Palette, Role};

/// Makes the status helpers follow `mode` instead of `colored`'s own detection.
pub fn apply_color_mode(mode: ColorMode) {
    colored::control::set_override(mode.is_colored());
}

/// Prints a warning message in bold yellow (always shown).
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Prints an error message in bold red (always shown).
pub fn error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
