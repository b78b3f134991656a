//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report localization keys that no source file references
//! - `prune`: Remove those keys from the string table
//! - `init`: Initialize keyprune configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by `check` and `prune`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// JSON string table to check (overrides config file)
    #[arg(long, env = "KEYPRUNE_STRINGS_FILE")]
    pub strings_file: Option<PathBuf>,

    /// Source tree to scan; repeat for several (overrides config file)
    #[arg(long = "source-root")]
    pub source_roots: Vec<PathBuf>,

    /// Source file extension to scan; repeat for several (overrides config file)
    #[arg(long = "extension")]
    pub extensions: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.strings_file {
            config.strings_file = path.to_string_lossy().into_owned();
        }
        if !self.source_roots.is_empty() {
            config.source_roots = self
                .source_roots
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PruneCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys that are not referenced by any source file
    Check(CheckCommand),
    /// Remove unreferenced keys from the JSON string table
    Prune(PruneCommand),
    /// Initialize a new .keyprunerc.json configuration file
    Init,
}
