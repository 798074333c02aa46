//! Shell integration: the `to` wrapper function and completion scripts.

use crate::cli::{Cli, InitShell};
use crate::{APP_NAME, RESOLVE_MARKER, SHELL_FUNCTION};
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Wrapper for bash and zsh.
///
/// Output starting with the resolve marker is a directory to change into;
/// anything else (listing, messages) is echoed back unchanged.
const POSIX_WRAPPER: &str = r#"__FUNC__() {
    local output status
    output="$(command __APP__ "$@")"
    status=$?
    case "$output" in
        __MARK__*) cd -- "${output#__MARK__}" ;;
        *) [ -n "$output" ] && printf '%s\n' "$output" ;;
    esac
    return $status
}
"#;

/// Wrapper for fish.
const FISH_WRAPPER: &str = r#"function __FUNC__
    set -l output (command __APP__ $argv)
    set -l code $status
    if test (count $output) -eq 1; and string match -q -- '__MARK__*' $output[1]
        cd (string sub -s 2 -- $output[1])
    else if test (count $output) -gt 0
        printf '%s\n' $output
    end
    return $code
end
"#;

/// Writes the `to` function definition for `shell`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn init(shell: InitShell, out: &mut dyn Write) -> io::Result<()> {
    let template = match shell {
        InitShell::Bash | InitShell::Zsh => POSIX_WRAPPER,
        InitShell::Fish => FISH_WRAPPER,
    };
    let script = template
        .replace("__FUNC__", SHELL_FUNCTION)
        .replace("__APP__", APP_NAME)
        .replace("__MARK__", &RESOLVE_MARKER.to_string());
    out.write_all(script.as_bytes())
}

/// Writes a completion script for `shell`.
pub fn completions(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Cli::command(), APP_NAME, out);
}
