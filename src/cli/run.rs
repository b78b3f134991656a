use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init, prune::prune},
};
use anyhow::Result;

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the scan summary and exit behavior
/// - `Err` if the command fails (missing source root, malformed JSON, I/O errors)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Prune(cmd)) => prune(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
