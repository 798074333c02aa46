use crate::resolver::resolve;
use crate::store::ShortcutStore;
use crate::utils::paths::expand_home;
use crate::{MajortomContext, RESOLVE_MARKER};
use anyhow::Result;
use std::io::Write;

/// Print the absolute directory for a (possibly abbreviated) shortcut
///
/// The line is `:<path>`; the shell wrapper recognizes the marker and changes
/// into the directory.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded, or the query matches no
/// shortcut or more than one
pub fn execute(ctx: &MajortomContext, query: &str, out: &mut dyn Write) -> Result<()> {
    let store = ShortcutStore::load(&ctx.config_path)?;
    let target = resolve(&store, query).into_result(query)?;

    let path = expand_home(target, &ctx.home);
    writeln!(out, "{RESOLVE_MARKER}{}", path.display())?;
    Ok(())
}
