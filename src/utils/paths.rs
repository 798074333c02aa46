use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Returns the invoking user's home directory
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not find home directory")
}

/// Expands a leading `~` component against `home`
///
/// Only `~` on its own or followed by `/` is expanded; `/foo/~/bar` and
/// `~user/x` come back unchanged.
#[must_use]
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        let rest = rest.trim_start_matches('/');
        if rest.is_empty() {
            return home.to_path_buf();
        }
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Replaces a leading `home` prefix with `~`
///
/// The match is anchored and component-wise: `/home/al` does not abbreviate
/// `/home/alice/x` and never touches a home string further into the path.
#[must_use]
pub fn abbreviate_home(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.to_string_lossy()),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
