use thiserror::Error;

/// Local failures that stop the CLI before a command can report its outcome.
///
/// Request and agent-side problems (unbuildable client, unreachable host, bad
/// status, missing metric) are printed by the commands themselves and never
/// surface here.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 10,
        }
    }
}
