//! Report formatting and printing utilities.
//!
//! Results go to stdout; the file dump and verbose diagnostics go to stderr. Separate from core
//! logic to allow keyprune to be used as a library.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the notice for a key that no source file references.
pub fn print_not_found(key: &str) {
    print_not_found_to(key, &mut io::stdout().lock());
}

pub fn print_not_found_to<W: Write>(key: &str, writer: &mut W) {
    let _ = writeln!(writer, "\"{}\" not found in any file!", key);
}

/// Dump the collected source files to stderr.
pub fn print_source_files(files: &[PathBuf]) {
    print_source_files_to(files, &mut io::stderr().lock());
}

pub fn print_source_files_to<W: Write>(files: &[PathBuf], writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} collected {} source {}",
        "note:".bold(),
        files.len(),
        plural(files.len(), "file", "files")
    );
    for file in files {
        let _ = writeln!(writer, "  {}", file.display());
    }
}

/// Print a verbose diagnostic to stderr.
pub fn print_note(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "note:".bold(), message);
}

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, writer),
        CommandSummary::Prune(summary) => print_prune(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_check<W: Write>(summary: &ScanSummary, writer: &mut W) {
    if summary.unused_keys.is_empty() {
        print_clean_table(summary, writer);
        return;
    }

    for entry in &summary.unused_keys {
        print_not_found_to(&entry.key, writer);
    }

    let count = summary.unused_keys.len();
    let _ = writeln!(
        writer,
        "\n{} {} unused {} in {}",
        FAILURE_MARK.red(),
        count,
        plural(count, "key", "keys"),
        summary.strings_file.display()
    );
    let _ = writeln!(
        writer,
        "Run {} to remove them.",
        "keyprune prune".cyan()
    );
}

fn print_prune<W: Write>(summary: &ScanSummary, writer: &mut W) {
    if summary.unused_keys.is_empty() {
        print_clean_table(summary, writer);
        return;
    }

    let count = summary.unused_keys.len();
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Removed {} unused {} from {} ({} kept)",
            count,
            plural(count, "key", "keys"),
            summary.strings_file.display(),
            summary.total_keys - count
        )
        .green()
    );
}

fn print_clean_table<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} against {} source {} - no unused keys found",
            summary.total_keys,
            plural(summary.total_keys, "key", "keys"),
            summary.source_files_checked,
            plural(summary.source_files_checked, "file", "files")
        )
        .green()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
