//! Command-line interface definitions for majortom.
//!
//! The definitions are shared between the main binary and the xtask man page
//! generator.
//!
//! Note: Field-level documentation is provided via clap attributes, so we allow
//! missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::output::ColorMode;
use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// Main CLI structure for majortom.
#[derive(Parser, Debug)]
#[command(
    name = "majortom",
    version = crate::VERSION,
    disable_version_flag = true,
    about = "Jump to bookmarked directories by (abbreviated) shortcut",
    long_about = "Bookmarks directories under short names. Given a shortcut, or any unique \
                  prefix of one, prints the directory prefixed with ':' for the `to` shell \
                  function to cd into. Without arguments, lists all shortcuts."
)]
pub struct Cli {
    /// Shortcut to resolve, or the name to add/delete
    #[arg(value_name = "SHORTCUT")]
    pub shortcuts: Vec<String>,

    /// Show version
    #[arg(long)]
    pub version: bool,

    /// Create an empty configuration file
    #[arg(long, conflicts_with_all = ["add", "delete", "shortcuts"])]
    pub init: bool,

    /// Add current path (as requested shortcut)
    #[arg(short, long, conflicts_with = "delete")]
    pub add: bool,

    /// Delete requested shortcut
    #[arg(short, long)]
    pub delete: bool,

    /// When to use colors
    #[arg(long, value_enum, env = "MAJORTOM_COLOR", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print the `to` shell function for the given shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub shell_init: Option<InitShell>,

    /// Generate shell completion scripts
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Color depth requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from NO_COLOR, COLORTERM and TERM
    Auto,
    /// 24-bit colors
    #[value(name = "truecolor")]
    TrueColor,
    /// 256-color palette
    #[value(name = "256")]
    Ansi256,
    /// Basic 16 colors
    #[value(name = "16")]
    Ansi16,
    /// No colors
    Never,
}

impl ColorChoice {
    /// Resolves the choice to a concrete rendering mode.
    #[must_use]
    pub fn mode(self) -> ColorMode {
        match self {
            Self::Auto => ColorMode::detect(),
            Self::TrueColor => ColorMode::TrueColor,
            Self::Ansi256 => ColorMode::Ansi256,
            Self::Ansi16 => ColorMode::Ansi16,
            Self::Never => ColorMode::None,
        }
    }
}

/// Shells with a `to` wrapper function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InitShell {
    Bash,
    Zsh,
    Fish,
}
