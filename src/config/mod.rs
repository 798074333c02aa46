use crate::utils::paths::expand_home;
use crate::{DEFAULT_CONFIG_PATH, ENV_VAR_CONFIG};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locates the store file from `$MAJORTOM_CONFIG` or the default path.
#[must_use]
pub fn locate(home: &Path) -> PathBuf {
    let from_env = std::env::var(ENV_VAR_CONFIG).ok();
    let path = resolve_location(from_env.as_deref(), home);
    debug!(path = %path.display(), from_env = from_env.is_some(), "Config location resolved");
    path
}

/// Picks the store location from an optional override.
///
/// An empty override counts as unset. Both the override and the default are
/// tilde-expanded against `home`.
#[must_use]
pub fn resolve_location(override_path: Option<&str>, home: &Path) -> PathBuf {
    let raw = match override_path {
        Some(path) if !path.is_empty() => path,
        _ => DEFAULT_CONFIG_PATH,
    };
    expand_home(raw, home)
}

/// Explains where the store file is looked up, for the `--help` footer.
#[must_use]
pub fn describe_location(home: Option<&Path>) -> String {
    let env_value = std::env::var(ENV_VAR_CONFIG).ok();
    let mut text = format!(
        "NOTE:\n  Set the environment variable {ENV_VAR_CONFIG} to point to the configuration file.\n  \
         If not set, the configuration file path defaults to: {DEFAULT_CONFIG_PATH}\n"
    );

    match env_value.as_deref() {
        Some(value) if !value.is_empty() => {
            text.push_str(&format!("  Currently {ENV_VAR_CONFIG} is set to \"{value}\".\n"));
        }
        _ => text.push_str(&format!("  Currently {ENV_VAR_CONFIG} is not set.\n")),
    }

    if let Some(home) = home {
        let expected = resolve_location(env_value.as_deref(), home);
        text.push_str(&format!(
            "  Expecting config file to be at: {}\n",
            expected.display()
        ));
    }

    text
}
