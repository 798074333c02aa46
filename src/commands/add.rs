use crate::MajortomContext;
use crate::store::ShortcutStore;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Bind the working directory to `name`, replacing any previous binding
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be loaded
/// - The working directory is unavailable
/// - The store cannot be saved
pub fn execute(ctx: &MajortomContext, name: &str, out: &mut dyn Write) -> Result<()> {
    let mut store = ShortcutStore::load(&ctx.config_path)?;
    let cwd = ctx.current_dir()?;

    writeln!(out, "Adding shortcut \"{name}\"...")?;
    if let Some(previous) = store.add(name, &cwd, &ctx.home) {
        debug!(name, %previous, "Replacing existing shortcut");
    }

    store.save(&ctx.config_path)?;
    Ok(())
}
