use std::process::ExitCode;

use super::commands::CommandResult;

/// How a keyprune run ends.
///
/// `check` is the only command that fails on findings; `prune` and `init`
/// succeed whenever they complete. Any propagated error maps to `Error`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Nothing left to prune, or the command did its work.
    Success,
    /// `check` found keys that no source file references.
    Failure,
    /// The run aborted (missing source root, malformed table, I/O error, bad config).
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.exit_on_unused && result.unused_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
