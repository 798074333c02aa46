use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "MAJORTOM_LOG";

/// Filter used when `MAJORTOM_LOG` is unset or invalid.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "majortom=debug" } else { "warn" }
}

/// Installs the global subscriber writing to stderr.
///
/// Stdout is reserved for listings and the resolved path, which the shell
/// wrapper parses. `ansi` follows the active color mode. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(verbose: bool, ansi: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
