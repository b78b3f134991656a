//! The pruning pass: collect files, load the table, find unused keys, remove them.

use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;

use super::{
    file_scanner::{ScanOptions, collect_source_files},
    key_usage::UsageMatcher,
    string_table::StringTable,
};
use crate::config::Config;

/// A key that no scanned file references.
#[derive(Debug, Clone, PartialEq)]
pub struct UnusedKey {
    pub key: String,
    pub value: Value,
}

/// Everything a pruning pass needs, resolved from the config.
pub struct PruneContext {
    pub files: Vec<PathBuf>,
    pub table: StringTable,
    pub matcher: UsageMatcher,
}

impl PruneContext {
    /// Collect source files, then load the table.
    ///
    /// `on_files` sees the collected file list before the table is read.
    pub fn new(config: &Config, on_files: impl FnOnce(&[PathBuf])) -> Result<Self> {
        let roots: Vec<PathBuf> = config.source_roots.iter().map(PathBuf::from).collect();
        let options = ScanOptions {
            extensions: config.normalized_extensions(),
            ignores: config.ignores.clone(),
        };
        let files = collect_source_files(&roots, &options)?;
        on_files(&files);

        let table = StringTable::load(&PathBuf::from(&config.strings_file))?;
        let matcher = UsageMatcher::new(
            config.exempt_patterns.clone(),
            config.stripped_prefixes.clone(),
        );

        Ok(Self {
            files,
            table,
            matcher,
        })
    }

    pub fn exempt_count(&self) -> usize {
        self.table
            .keys()
            .filter(|key| self.matcher.is_exempt(key))
            .count()
    }

    /// Unused keys in table order, with their values.
    pub fn find_unused(&self) -> Result<Vec<UnusedKey>> {
        let unused = self
            .matcher
            .find_unused_keys(self.table.keys(), &self.files)?;

        Ok(unused
            .into_iter()
            .map(|key| UnusedKey {
                key: key.to_string(),
                value: self.table.get(key).cloned().unwrap_or(Value::Null),
            })
            .collect())
    }

    /// Remove the given keys from the table and write it back.
    ///
    /// `on_removed` is called once per key, before the file is written.
    pub fn prune(&mut self, unused: &[UnusedKey], mut on_removed: impl FnMut(&str)) -> Result<()> {
        for entry in unused {
            on_removed(&entry.key);
            self.table.remove(&entry.key);
        }
        self.table.save()
    }
}
