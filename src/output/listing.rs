//! Rendering of the shortcut table shown when no shortcut is given.

use super::palette::{Palette, Role};
use crate::SHELL_FUNCTION;
use crate::store::ShortcutStore;
use crate::utils::paths::expand_home;
use std::path::{Path, PathBuf};

/// Marker in front of the shortcut bound to the working directory.
const CURRENT_MARKER: &str = "▶ ";

/// Padding in front of every other shortcut.
const NORMAL_MARKER: &str = "  ";

/// One line of the listing, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    /// Shortcut name
    pub name: String,
    /// Target as stored (possibly `~`-abbreviated)
    pub stored: String,
    /// Target expanded to an absolute path
    pub absolute: PathBuf,
    /// The target is the working directory
    pub is_current: bool,
    /// The target exists on disk
    pub exists: bool,
}

/// Computes listing rows in name order.
///
/// `is_current` and `exists` are independent: a row can be both current and
/// stale if the working directory was removed underneath the shell.
#[must_use]
pub fn listing_rows(store: &ShortcutStore, cwd: &Path, home: &Path) -> Vec<ListingRow> {
    store
        .iter()
        .map(|(name, stored)| {
            let absolute = expand_home(stored, home);
            ListingRow {
                name: name.to_string(),
                stored: stored.to_string(),
                is_current: absolute == cwd,
                exists: absolute.exists(),
                absolute,
            }
        })
        .collect()
}

/// Message shown instead of an empty table.
#[must_use]
pub fn empty_hint() -> String {
    format!(
        "No shortcuts yet. Run \"{SHELL_FUNCTION} -a <name>\" in a directory to add your first one."
    )
}

/// Renders the whole listing, one line per shortcut, each ending in `\n`.
#[must_use]
pub fn render_listing(store: &ShortcutStore, cwd: &Path, home: &Path, palette: &Palette) -> String {
    let rows = listing_rows(store, cwd, home);
    if rows.is_empty() {
        return format!("{}\n", empty_hint());
    }

    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Available shortcuts:\n");
    for row in &rows {
        let (marker, name_role) = if row.is_current {
            (CURRENT_MARKER, Role::Current)
        } else {
            (NORMAL_MARKER, Role::Shortcut)
        };
        let path_role = if row.exists { Role::Path } else { Role::PathStale };

        let label = format!("{marker}{:<width$} ", row.name);
        out.push_str(&palette.paint(name_role, &label));
        out.push_str(&palette.paint(path_role, &row.stored));
        out.push('\n');
    }
    out
}
