//! CLI argument definitions for hubble.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `get` | Fetch metrics, optionally a single dotted path |
//! | `ping` | Check agent reachability |
//! | `version` | Show version information |
//!
//! Inside `get` and `ping`, `-h` selects the host, so their help is only
//! available as `--help`.
//!
//! # Examples
//!
//! ```bash
//! hubble ping
//! hubble get -h 10.0.0.5 -p 9703
//! hubble get -m memory.available
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};
use hubble_core::{AgentTarget, DEFAULT_HOST, DEFAULT_PORT};

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Query a monitoring agent for liveness and metrics.
#[derive(Debug, Parser)]
#[command(
    name = "hubble",
    about = "Query a monitoring agent for liveness and metrics",
    disable_version_flag = true
)]
pub struct Cli {
    /// Show version information.
    #[arg(short = 'v', long = "version", default_value_t = false)]
    pub show_version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch metrics.
    ///
    /// Prints the raw metrics document, or with `-m` the value found at a
    /// dotted path such as `memory.available`.
    #[command(disable_help_flag = true)]
    Get(GetArgs),

    /// Check agent reachability.
    #[command(disable_help_flag = true)]
    Ping(PingArgs),

    /// Show version information.
    Version,
}

/// Where the agent listens.
#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    /// Host to connect to.
    #[arg(short = 'h', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to connect to.
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl TargetArgs {
    pub fn target(&self) -> AgentTarget {
        AgentTarget::new(self.host.clone(), self.port)
    }
}

/// Arguments for the `get` command.
#[derive(Debug, Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Specific metric to retrieve (e.g., memory.available).
    #[arg(short = 'm', long)]
    pub metric: Option<String>,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl GetArgs {
    /// Requested metric path; an empty `-m ""` means the whole document.
    pub fn metric(&self) -> Option<&str> {
        self.metric.as_deref().filter(|metric| !metric.is_empty())
    }
}

/// Arguments for the `ping` command.
#[derive(Debug, Args)]
pub struct PingArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn get_uses_default_target() {
        let cli = parse(&["hubble", "get"]);
        let Some(Command::Get(args)) = cli.command else {
            panic!("expected get command");
        };
        assert_eq!(args.target.target(), AgentTarget::default());
        assert_eq!(args.metric(), None);
    }

    #[test]
    fn get_accepts_short_host_port_and_metric() {
        let cli = parse(&["hubble", "get", "-h", "10.0.0.5", "-p", "8080", "-m", "cpu.load"]);
        let Some(Command::Get(args)) = cli.command else {
            panic!("expected get command");
        };
        assert_eq!(args.target.target(), AgentTarget::new("10.0.0.5", 8080));
        assert_eq!(args.metric(), Some("cpu.load"));
    }

    #[test]
    fn empty_metric_means_whole_document() {
        let cli = parse(&["hubble", "get", "-m", ""]);
        let Some(Command::Get(args)) = cli.command else {
            panic!("expected get command");
        };
        assert_eq!(args.metric(), None);
    }

    #[test]
    fn ping_accepts_long_flags() {
        let cli = parse(&["hubble", "ping", "--host", "agent.local", "--port", "9000"]);
        let Some(Command::Ping(args)) = cli.command else {
            panic!("expected ping command");
        };
        assert_eq!(args.target.target(), AgentTarget::new("agent.local", 9000));
    }

    #[test]
    fn short_v_requests_version() {
        let cli = parse(&["hubble", "-v"]);
        assert!(cli.show_version);
        assert!(cli.command.is_none());
    }

    #[test]
    fn missing_command_parses_to_none() {
        assert!(parse(&["hubble"]).command.is_none());
    }

    #[test]
    fn unknown_command_is_an_invalid_subcommand() {
        let err = Cli::try_parse_from(["hubble", "status"]).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = Cli::try_parse_from(["hubble", "ping", "-p", "70000"]).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
