use std::path::PathBuf;

use crate::core::UnusedKey;

#[derive(Debug)]
pub enum CommandSummary {
    Check(ScanSummary),
    Prune(ScanSummary),
    Init(InitSummary),
}

/// Outcome of scanning one string table against the source trees.
#[derive(Debug)]
pub struct ScanSummary {
    pub strings_file: PathBuf,
    pub source_files_checked: usize,
    pub total_keys: usize,
    pub unused_keys: Vec<UnusedKey>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running keyprune commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub unused_count: usize,
    /// Whether unused keys turn into a non-zero exit status.
    pub exit_on_unused: bool,
}
