//! Keyprune - unused localization key pruner
//!
//! Keyprune scans source trees for textual references to every key of a JSON
//! string table and removes the keys that nothing mentions. Matching is a plain
//! substring search per line, with exempt namespaces and prefix-stripped
//! alternate forms.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: File collection, table loading, usage scanning and pruning

pub mod cli;
pub mod config;
pub mod core;
