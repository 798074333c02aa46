//! Request planning and execution.
//!
//! [`Request::from_cli`] reduces the parsed command line to exactly one
//! operation; [`execute`] runs it and writes user-facing output to the given
//! writer. Errors are returned, never turned into a process exit here.

pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod resolve;
pub mod shell;

use crate::cli::{Cli, InitShell};
use crate::error::MajortomError;
use crate::{APP_NAME, MajortomContext, VERSION};
use anyhow::Result;
use clap_complete::Shell;
use std::io::Write;
use tracing::debug;

/// The single operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Print name and version
    ShowVersion,
    /// Print the `to` wrapper function
    ShellInit(InitShell),
    /// Print completion script
    Completions(Shell),
    /// Create the store file
    Init,
    /// Show all shortcuts
    List,
    /// Bind the working directory to a name
    Add(String),
    /// Remove a shortcut
    Delete(String),
    /// Print the directory for a (possibly abbreviated) shortcut
    Resolve(String),
}

impl Request {
    /// Plans the operation for a parsed command line.
    ///
    /// Version and shell helpers take precedence over everything else. `-a`
    /// or `-d` without a name falls back to listing.
    ///
    /// # Errors
    ///
    /// Returns a `Usage` error when more than one shortcut name is given.
    pub fn from_cli(cli: &Cli) -> Result<Self, MajortomError> {
        if cli.version {
            return Ok(Self::ShowVersion);
        }
        if let Some(shell) = cli.shell_init {
            return Ok(Self::ShellInit(shell));
        }
        if let Some(shell) = cli.completions {
            return Ok(Self::Completions(shell));
        }
        if cli.shortcuts.len() > 1 {
            return Err(MajortomError::Usage("Too many arguments.".to_string()));
        }
        if cli.init {
            return Ok(Self::Init);
        }

        let Some(name) = cli.shortcuts.first().cloned() else {
            return Ok(Self::List);
        };

        Ok(if cli.add {
            Self::Add(name)
        } else if cli.delete {
            Self::Delete(name)
        } else {
            Self::Resolve(name)
        })
    }
}

/// Runs `request`, writing its output to `out`.
///
/// # Errors
///
/// Returns whatever the operation fails with; see [`MajortomError`].
pub fn execute(ctx: &MajortomContext, request: &Request, out: &mut dyn Write) -> Result<()> {
    debug!(?request, config = %ctx.config_path.display(), "Executing request");

    match request {
        Request::ShowVersion => writeln!(out, "{APP_NAME} {VERSION}")?,
        Request::ShellInit(kind) => shell::init(*kind, out)?,
        Request::Completions(kind) => shell::completions(*kind, out),
        Request::Init => init::execute(ctx, out)?,
        Request::List => list::execute(ctx, out)?,
        Request::Add(name) => add::execute(ctx, name, out)?,
        Request::Delete(name) => delete::execute(ctx, name, out)?,
        Request::Resolve(name) => resolve::execute(ctx, name, out)?,
    }

    Ok(())
}
