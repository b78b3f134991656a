use std::env;

use anyhow::{Context, Result};

use super::super::{args::CommonArgs, report};
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    config::{Config, load_config},
    core::{PruneContext, UnusedKey},
};

/// Load the config from the current directory and apply command-line overrides.
pub fn resolve_config(common: &CommonArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    if common.verbose
        && let Some(path) = &loaded.path
    {
        report::print_note(&format!("using config {}", path.display()));
    }

    let mut config = loaded.config;
    common.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

/// Build the pruning context. The collected files are dumped before the scan.
pub fn prepare(common: &CommonArgs) -> Result<PruneContext> {
    let config = resolve_config(common)?;
    let ctx = PruneContext::new(&config, |files| report::print_source_files(files))?;

    if common.verbose {
        let exempt = ctx.exempt_count();
        if exempt > 0 {
            report::print_note(&format!("{} key(s) in exempt namespaces", exempt));
        }
    }

    Ok(ctx)
}

pub fn scan_summary(ctx: &PruneContext, unused_keys: Vec<UnusedKey>) -> ScanSummary {
    ScanSummary {
        strings_file: ctx.table.path().to_path_buf(),
        source_files_checked: ctx.files.len(),
        total_keys: ctx.table.len(),
        unused_keys,
    }
}

pub fn finish(summary: CommandSummary, exit_on_unused: bool) -> CommandResult {
    let unused_count = match &summary {
        CommandSummary::Check(s) | CommandSummary::Prune(s) => s.unused_keys.len(),
        CommandSummary::Init(_) => 0,
    };

    CommandResult {
        summary,
        unused_count,
        exit_on_unused,
    }
}
