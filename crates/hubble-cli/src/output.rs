use std::io::Write;

use serde_json::Value;

use crate::cli::VERSION;
use crate::error::CliError;

/// Human-readable form of a resolved metric.
///
/// Strings are printed bare; everything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn version(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Version: {VERSION}")?;
    Ok(())
}

pub fn missing_command(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Error: Missing command. Use -h for help.")?;
    Ok(())
}

pub fn unknown_command(out: &mut impl Write, name: &str) -> Result<(), CliError> {
    writeln!(out, "Error: Unknown command '{name}'. Use -h for help.")?;
    Ok(())
}
