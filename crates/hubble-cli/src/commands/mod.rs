mod get;
mod ping;

use std::io::Write;

use hubble_core::ReqwestHttpClient;
use tracing::debug;

use crate::cli::Command;
use crate::error::CliError;
use crate::output;

/// Dispatch a parsed command to its handler.
pub fn run(command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    debug!(?command, "dispatching command");
    match command {
        Command::Get(args) => get::run(args, &ReqwestHttpClient::new(), out),
        Command::Ping(args) => ping::run(args, &ReqwestHttpClient::new(), out),
        Command::Version => output::version(out),
    }
}
