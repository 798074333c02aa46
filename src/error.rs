use crate::output::{Palette, Role};
use crate::{DEFAULT_CONFIG_PATH, ENV_VAR_CONFIG, SHELL_FUNCTION};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Every way an invocation can fail.
///
/// All variants are terminal: `main` renders the message and exits with 1.
#[derive(Debug)]
pub enum MajortomError {
    /// Bad command line (too many shortcut names, conflicting flags)
    Usage(String),
    /// The store file is missing and the request needs it
    ConfigNotFound {
        /// Where the store was expected
        path: PathBuf,
    },
    /// `--init` was asked to create a store that already exists
    ConfigAlreadyExists {
        /// The existing store file
        path: PathBuf,
    },
    /// Filesystem read or write failure
    Io {
        /// What was being attempted, e.g. "write store"
        action: &'static str,
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// No shortcut equals or starts with the query
    NoMatch {
        /// The shortcut the user typed
        query: String,
    },
    /// More than one shortcut starts with the query
    AmbiguousMatch {
        /// The shortcut the user typed
        query: String,
        /// Every matching name, sorted
        candidates: Vec<String>,
    },
    /// `--delete` named a shortcut that is not stored
    EntryNotFound {
        /// The requested name
        name: String,
    },
}

impl MajortomError {
    /// Short description of the error category
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Usage(_) => "Usage Error",
            Self::ConfigNotFound { .. } => "Config Not Found",
            Self::ConfigAlreadyExists { .. } => "Config Already Exists",
            Self::Io { .. } => "I/O Error",
            Self::NoMatch { .. } => "No Match",
            Self::AmbiguousMatch { .. } => "Ambiguous Match",
            Self::EntryNotFound { .. } => "Entry Not Found",
        }
    }

    /// Renders the message for the terminal, highlighting with the palette.
    ///
    /// Ambiguous matches list the candidates in the shortcut color; every other
    /// error is painted whole in the error color.
    #[must_use]
    pub fn render(&self, palette: &Palette) -> String {
        match self {
            Self::AmbiguousMatch { candidates, .. } => {
                let names: Vec<String> = candidates
                    .iter()
                    .map(|name| palette.paint(Role::Shortcut, name))
                    .collect();
                format!("Matched multiple shortcuts: {}", names.join(", "))
            }
            other => palette.paint(Role::Error, &other.to_string()),
        }
    }
}

impl fmt::Display for MajortomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}"),
            Self::ConfigNotFound { path } => write!(
                f,
                "Config file not found at {}. Run with --init to create it \
                 (set {ENV_VAR_CONFIG} to use a location other than {DEFAULT_CONFIG_PATH}).",
                path.display()
            ),
            Self::ConfigAlreadyExists { path } => {
                write!(f, "Config file already exists at {}", path.display())
            }
            Self::Io {
                action,
                path,
                source,
            } => write!(f, "Failed to {action} {}: {source}", path.display()),
            Self::NoMatch { query } => write!(
                f,
                "No match found for shortcut \"{query}\". Run \"{SHELL_FUNCTION}\" with no arguments for a list of shortcuts."
            ),
            Self::AmbiguousMatch { candidates, .. } => {
                write!(f, "Matched multiple shortcuts: {}", candidates.join(", "))
            }
            Self::EntryNotFound { name } => write!(f, "Shortcut \"{name}\" does not exist."),
        }
    }
}

impl std::error::Error for MajortomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
