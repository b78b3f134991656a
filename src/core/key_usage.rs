//! Key usage scanning.
//!
//! A key counts as used when its text, or its text with one of the stripped
//! prefixes removed, appears verbatim in some line of some scanned file.
//! Keys inside an exempt namespace are never scanned and always count as used.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

/// Decides whether a key is exempt and which needles stand for it in source text.
#[derive(Debug, Clone, Default)]
pub struct UsageMatcher {
    exempt_patterns: Vec<String>,
    stripped_prefixes: Vec<String>,
}

impl UsageMatcher {
    pub fn new(exempt_patterns: Vec<String>, stripped_prefixes: Vec<String>) -> Self {
        Self {
            exempt_patterns,
            stripped_prefixes,
        }
    }

    /// True if the key belongs to a namespace that is never pruned.
    pub fn is_exempt(&self, key: &str) -> bool {
        self.exempt_patterns
            .iter()
            .any(|pattern| key.contains(pattern.as_str()))
    }

    /// The raw key followed by every prefix-stripped form of it.
    pub fn needles<'k>(&self, key: &'k str) -> Vec<&'k str> {
        let mut needles = vec![key];
        for prefix in &self.stripped_prefixes {
            if let Some(stripped) = key.strip_prefix(prefix.as_str())
                && !needles.contains(&stripped)
            {
                needles.push(stripped);
            }
        }
        needles
    }

    /// Keys never referenced by any of `files`, in the order they were given.
    ///
    /// Each file is read once and every file is read, so an unreadable file
    /// always fails the scan. A line is only tested against keys that are
    /// still unmatched.
    pub fn find_unused_keys<'k, I>(&self, keys: I, files: &[PathBuf]) -> Result<Vec<&'k str>>
    where
        I: IntoIterator<Item = &'k str>,
    {
        let mut pending: Vec<PendingKey<'k>> = keys
            .into_iter()
            .filter(|key| !self.is_exempt(key))
            .map(|key| PendingKey {
                key,
                needles: self.needles(key),
            })
            .collect();

        for file in files {
            let content = fs::read_to_string(file)
                .with_context(|| format!("Failed to read source file: {}", file.display()))?;

            for line in content.lines() {
                pending.retain(|p| !p.matches(line));
                if pending.is_empty() {
                    break;
                }
            }
        }

        Ok(pending.into_iter().map(|p| p.key).collect())
    }
}

struct PendingKey<'k> {
    key: &'k str,
    needles: Vec<&'k str>,
}

impl PendingKey<'_> {
    fn matches(&self, line: &str) -> bool {
        self.needles.iter().any(|needle| line.contains(needle))
    }
}
