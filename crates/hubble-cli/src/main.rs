mod cli;
mod commands;
mod error;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(std::env::args_os(), &mut out) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

/// Diagnostics go to stderr and stay quiet unless `RUST_LOG` asks for more.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn run<I, T>(args: I, out: &mut impl Write) -> Result<ExitCode, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) if error.kind() == ErrorKind::InvalidSubcommand => {
            match error.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => output::unknown_command(out, name)?,
                _ => error.print()?,
            }
            return Ok(ExitCode::SUCCESS);
        }
        Err(error) => {
            error.print()?;
            let code = u8::try_from(error.exit_code()).unwrap_or(2);
            return Ok(ExitCode::from(code));
        }
    };

    if cli.show_version {
        output::version(out)?;
        return Ok(ExitCode::SUCCESS);
    }

    match &cli.command {
        Some(command) => commands::run(command, out)?,
        None => output::missing_command(out)?,
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> String {
        let mut out = Vec::new();
        run(args.iter().copied(), &mut out).expect("cli runs");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn version_flag_prints_version() {
        let output = run_args(&["hubble", "-v"]);
        assert_eq!(output, format!("Version: {}\n", cli::VERSION));
    }

    #[test]
    fn version_subcommand_matches_flag() {
        let flag = run_args(&["hubble", "-v"]);
        let command = run_args(&["hubble", "version"]);
        assert_eq!(flag, command);
    }

    #[test]
    fn missing_command_is_reported() {
        let output = run_args(&["hubble"]);
        assert_eq!(output, "Error: Missing command. Use -h for help.\n");
    }

    #[test]
    fn unknown_command_is_named() {
        let output = run_args(&["hubble", "status"]);
        assert_eq!(output, "Error: Unknown command 'status'. Use -h for help.\n");
    }
}
