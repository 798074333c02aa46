use crate::MajortomContext;
use crate::output::render_listing;
use crate::store::ShortcutStore;
use anyhow::Result;
use std::io::Write;

/// List all shortcuts, marking the current directory and missing targets
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or the working directory is
/// unavailable
pub fn execute(ctx: &MajortomContext, out: &mut dyn Write) -> Result<()> {
    let store = ShortcutStore::load(&ctx.config_path)?;
    let cwd = ctx.current_dir()?;

    let listing = render_listing(&store, &cwd, &ctx.home, &ctx.palette);
    out.write_all(listing.as_bytes())?;
    Ok(())
}
