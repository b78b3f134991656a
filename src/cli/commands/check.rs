use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    CommandResult, CommandSummary,
    helper::{finish, prepare, scan_summary},
};

/// Report unused keys without touching the string table.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = prepare(&cmd.common)?;
    let unused = ctx.find_unused()?;

    Ok(finish(
        CommandSummary::Check(scan_summary(&ctx, unused)),
        true,
    ))
}
