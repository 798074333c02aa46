#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Majortom - Directory Shortcuts
//!
//! Majortom binds short names to directories and resolves abbreviated names
//! back to full paths. The binary only prints the resolved path (prefixed with
//! [`RESOLVE_MARKER`]); the `to` shell function emitted by `--shell-init`
//! strips the marker and changes directory.
//!
//! ## Architecture
//!
//! - [`store`]: the persisted shortcut mapping and its file lifecycle
//! - [`resolver`]: exact/prefix shortcut matching
//! - [`output`]: palette roles and the shortcut listing
//! - [`config`]: locating the store file
//! - [`commands`]: request planning and execution
//! - [`utils`]: home-directory path helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use majortom::MajortomContext;
//! use majortom::commands::{self, Request};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = MajortomContext::new(majortom::output::ColorMode::None)?;
//! commands::execute(&ctx, &Request::Resolve("proj".into()), &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Request planning and command implementations.
pub mod commands;

/// Store file location resolution.
pub mod config;

/// Error taxonomy.
pub mod error;

/// Tracing subscriber setup.
pub mod logging;

/// Palette roles and listing rendering.
pub mod output;

/// Shortcut resolution.
pub mod resolver;

/// The persisted shortcut mapping.
pub mod store;

/// Utility functions and helpers.
pub mod utils;

use anyhow::Result;
use output::{ColorMode, Palette};
use std::path::PathBuf;

pub use error::MajortomError;

/// Application name, used in version output and messages.
pub const APP_NAME: &str = "majortom";

/// Current version of the majortom binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the store file location.
pub const ENV_VAR_CONFIG: &str = "MAJORTOM_CONFIG";

/// Default store file location, expanded against the home directory.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/majortom/majortom_config.json";

/// Prefix printed before a resolved path so the shell wrapper can recognize it.
pub const RESOLVE_MARKER: char = ':';

/// Name of the shell function installed by `--shell-init`.
pub const SHELL_FUNCTION: &str = "to";

/// Everything a command needs to know about its environment.
///
/// Built once per invocation in `main`; tests build it with
/// [`MajortomContext::new_explicit`] so nothing reads the real `$HOME`.
#[derive(Debug, Clone)]
pub struct MajortomContext {
    /// Home directory used for `~` expansion and abbreviation.
    pub home: PathBuf,

    /// Location of the store file.
    pub config_path: PathBuf,

    /// Styling for listing rows and error messages.
    pub palette: Palette,

    /// Working directory override; `None` reads the process working directory.
    pub working_dir: Option<PathBuf>,
}

impl MajortomContext {
    /// Creates a context from the real home directory and `$MAJORTOM_CONFIG`.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    pub fn new(color_mode: ColorMode) -> Result<Self> {
        let home = utils::paths::home_dir()?;
        let config_path = config::locate(&home);

        Ok(Self {
            home,
            config_path,
            palette: Palette::new(color_mode),
            working_dir: None,
        })
    }

    /// Creates a context with explicit paths and no colors.
    #[must_use]
    pub fn new_explicit(home: PathBuf, config_path: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            home,
            config_path,
            palette: Palette::new(ColorMode::None),
            working_dir: Some(working_dir),
        }
    }

    /// Returns the directory the invocation is running in.
    ///
    /// # Errors
    /// Returns an error if the process working directory is unavailable
    /// (for example when it was deleted).
    pub fn current_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.working_dir {
            return Ok(dir.clone());
        }
        std::env::current_dir().map_err(|source| {
            MajortomError::Io {
                action: "read current directory",
                path: PathBuf::from("."),
                source,
            }
            .into()
        })
    }
}
