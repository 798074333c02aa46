//! The persisted shortcut mapping.
//!
//! The store file is a single JSON object:
//!
//! ```json
//! {
//!     "locations": {
//!         "work": "~/src/work"
//!     }
//! }
//! ```
//!
//! Targets are kept in home-abbreviated form so the file survives a move to a
//! machine with a different home path. Every mutation rewrites the whole file.

use crate::error::MajortomError;
use crate::output;
use crate::utils::paths::abbreviate_home;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{Level, debug, span};

/// Shortcut names mapped to their (home-abbreviated) target directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutStore {
    /// Name to target path
    #[serde(default)]
    pub locations: BTreeMap<String, String>,
}

/// Wraps an `io::Error` with the action and file it came from.
fn io_error(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> MajortomError + use<> {
    let path = path.to_path_buf();
    move |source| MajortomError::Io {
        action,
        path,
        source,
    }
}

/// Follows symlinks to the file that actually holds the store.
///
/// A path that does not exist yet (or a dangling link) is returned as is.
fn resolve_symlinks(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl ShortcutStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses store JSON strictly.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed input.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Loads the store from `path`.
    ///
    /// A file that exists but does not parse loads as an empty store. A
    /// warning is printed, since the next save would replace the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        let span = span!(Level::DEBUG, "load_store", path = %path.display());
        let _guard = span.enter();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(MajortomError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(e) => return Err(io_error("read store", path)(e).into()),
        };

        match Self::parse(&content) {
            Ok(store) => {
                debug!(count = store.len(), "Store loaded");
                Ok(store)
            }
            Err(e) => {
                debug!(error = %e, "Store file is not valid JSON, continuing with no shortcuts");
                output::warning(&format!(
                    "Ignoring unreadable config file {} ({e}); no shortcuts loaded",
                    path.display()
                ));
                Ok(Self::default())
            }
        }
    }

    /// Serializes the store with four-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize shortcuts")?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Saves the store to `path`, replacing the whole file.
    ///
    /// The content goes to a temporary file in the same directory first, so a
    /// failed write leaves the previous store intact. A symlinked store is
    /// written through: the link stays and its target is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or moved over
    /// `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let span = span!(Level::DEBUG, "save_store", path = %path.display());
        let _guard = span.enter();

        let content = self.to_pretty_json()?;
        let target = resolve_symlinks(path);
        let path = target.as_path();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp =
            NamedTempFile::new_in(&dir).map_err(io_error("create temporary file in", &dir))?;
        tmp.write_all(&content)
            .map_err(io_error("write store", tmp.path()))?;

        // Keep the permissions of the file being replaced
        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(tmp.path(), metadata.permissions())
                .map_err(io_error("set permissions on", tmp.path()))?;
        }

        tmp.persist(path)
            .map_err(|e| io_error("write store", path)(e.error))?;

        debug!(count = self.len(), "Store saved");
        Ok(())
    }

    /// Creates a fresh, empty store file at `path`.
    ///
    /// Never overwrites: the file is opened with create-new semantics, so an
    /// existing store is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file already exists (`ConfigAlreadyExists`)
    /// - Parent directories cannot be created
    /// - The file cannot be written
    pub fn initialize(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(MajortomError::ConfigAlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
        }

        let content = Self::new().to_pretty_json()?;
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(MajortomError::ConfigAlreadyExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(e) => return Err(io_error("create store", path)(e).into()),
        };
        file.write_all(&content)
            .map_err(io_error("write store", path))?;

        debug!(path = %path.display(), "Store initialized");
        Ok(())
    }

    /// Binds `name` to `target`, stored in home-abbreviated form.
    ///
    /// Re-adding an existing name replaces its target. Returns the previous
    /// target, if any.
    pub fn add(&mut self, name: &str, target: &Path, home: &Path) -> Option<String> {
        self.locations
            .insert(name.to_string(), abbreviate_home(target, home))
    }

    /// Removes `name`, returning its target.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound` if `name` is not an exact key.
    pub fn delete(&mut self, name: &str) -> Result<String, MajortomError> {
        self.locations
            .remove(name)
            .ok_or_else(|| MajortomError::EntryNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the stored target for an exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.locations.get(name).map(String::as_str)
    }

    /// Number of shortcuts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the store holds no shortcuts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Shortcut names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// `(name, target)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.locations
            .iter()
            .map(|(name, target)| (name.as_str(), target.as_str()))
    }
}
