use std::io::Write;

use hubble_core::{resolve_bytes, AgentClient, AgentError, Endpoint, HttpClient};

use crate::cli::GetArgs;
use crate::error::CliError;
use crate::output::render_value;

pub fn run(args: &GetArgs, http: &impl HttpClient, out: &mut impl Write) -> Result<(), CliError> {
    let client = AgentClient::new(args.target.target(), http);
    writeln!(out, "Fetching metrics from {}", client.url(Endpoint::Metrics))?;

    let body = match client.metrics() {
        Ok(body) => body,
        Err(AgentError::Status { status }) => {
            writeln!(out, "Failed to fetch metrics. Status code: {status}")?;
            return Ok(());
        }
        Err(error) => {
            writeln!(out, "Failed to fetch metrics: {error}")?;
            return Ok(());
        }
    };

    let Some(metric) = args.metric() else {
        writeln!(out, "Metrics fetched successfully:")?;
        out.write_all(&body)?;
        writeln!(out)?;
        return Ok(());
    };

    match resolve_bytes(&body, metric) {
        Ok(value) => writeln!(out, "Value for '{metric}': {}", render_value(&value))?,
        Err(error) => writeln!(out, "Error retrieving metric '{metric}': {error}")?,
    }

    Ok(())
}
