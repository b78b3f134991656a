use anyhow::Result;

use super::super::{args::PruneCommand, report};
use super::{
    CommandResult, CommandSummary,
    helper::{finish, prepare, scan_summary},
};

/// Remove unused keys and rewrite the string table.
///
/// Each removed key is reported as it is dropped; the table is written once
/// all removals are done.
pub fn prune(cmd: PruneCommand) -> Result<CommandResult> {
    let mut ctx = prepare(&cmd.common)?;
    let unused = ctx.find_unused()?;
    let summary = scan_summary(&ctx, unused.clone());

    ctx.prune(&unused, report::print_not_found)?;

    Ok(finish(CommandSummary::Prune(summary), false))
}
