use crate::MajortomContext;
use crate::SHELL_FUNCTION;
use crate::store::ShortcutStore;
use anyhow::Result;
use std::io::Write;

/// Create an empty store file at the configured location
///
/// # Errors
///
/// Returns an error if:
/// - The store file already exists
/// - Parent directories or the file cannot be created
pub fn execute(ctx: &MajortomContext, out: &mut dyn Write) -> Result<()> {
    ShortcutStore::initialize(&ctx.config_path)?;

    writeln!(
        out,
        "Created config file at {}",
        ctx.config_path.display()
    )?;
    writeln!(
        out,
        "Add a shortcut with \"{SHELL_FUNCTION} -a <name>\" from the directory you want to bookmark."
    )?;
    Ok(())
}
