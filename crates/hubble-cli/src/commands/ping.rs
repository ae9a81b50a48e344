use std::io::Write;

use hubble_core::{AgentClient, Endpoint, HttpClient, PingOutcome};

use crate::cli::PingArgs;
use crate::error::CliError;

pub fn run(args: &PingArgs, http: &impl HttpClient, out: &mut impl Write) -> Result<(), CliError> {
    let client = AgentClient::new(args.target.target(), http);
    writeln!(out, "Pinging agent at {}", client.url(Endpoint::Ping))?;

    match client.ping() {
        Ok(PingOutcome::Reachable) => writeln!(out, "Ping is successful.")?,
        Ok(PingOutcome::Unhealthy { status }) => {
            writeln!(out, "Ping failed with status code: {status}")?;
        }
        Err(error) => writeln!(out, "Ping failed: {error}")?,
    }

    Ok(())
}
