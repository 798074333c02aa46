use crate::MajortomContext;
use crate::store::ShortcutStore;
use anyhow::Result;
use std::io::Write;

/// Remove the shortcut named exactly `name`
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be loaded
/// - `name` is not a stored shortcut (prefixes are not accepted here)
/// - The store cannot be saved
pub fn execute(ctx: &MajortomContext, name: &str, out: &mut dyn Write) -> Result<()> {
    let mut store = ShortcutStore::load(&ctx.config_path)?;
    store.delete(name)?;

    writeln!(out, "Deleting shortcut \"{name}\"...")?;
    store.save(&ctx.config_path)?;
    Ok(())
}
