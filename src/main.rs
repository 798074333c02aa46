use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};
use majortom::cli::Cli;
use majortom::commands::{self, Request};
use majortom::output::{self, Palette};
use majortom::{MajortomContext, MajortomError, config, logging};
use std::io::{self, Write};
use std::process;

fn main() {
    let cli = parse_cli();
    let palette = Palette::new(cli.color.mode());
    output::apply_color_mode(palette.mode());

    if let Err(e) = run(&cli, palette) {
        report(&e, &palette);
        process::exit(1);
    }
}

/// Parses arguments with the config location note appended to `--help`.
///
/// Clap's own usage errors exit with 1 like every other failure; help output
/// exits with 0.
fn parse_cli() -> Cli {
    let home = dirs::home_dir();
    let command = Cli::command().after_help(config::describe_location(home.as_deref()));

    match command
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            process::exit(code);
        }
    }
}

fn run(cli: &Cli, palette: Palette) -> Result<()> {
    logging::init(cli.verbose, palette.mode().is_colored());

    let request = Request::from_cli(cli)?;
    let ctx = MajortomContext::new(palette.mode())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(&ctx, &request, &mut out)?;
    out.flush()?;
    Ok(())
}

fn report(e: &anyhow::Error, palette: &Palette) {
    match e.downcast_ref::<MajortomError>() {
        Some(error) => eprintln!("{}", error.render(palette)),
        None => output::error(&format!("{e:#}")),
    }
}
