use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

/// Flat localization table backed by a JSON object.
///
/// Keys keep the order they had in the file.
#[derive(Debug, Clone)]
pub struct StringTable {
    file_path: PathBuf,
    entries: Map<String, Value>,
}

impl StringTable {
    /// Load the table. Fails if the file is missing, malformed, or its root
    /// is not an object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read strings file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        let entries = match value {
            Value::Object(map) => map,
            _ => bail!("Root of JSON file must be an object: {}", path.display()),
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Serialized form: 2-space indentation, non-ASCII kept as-is, trailing newline.
    pub fn render(&self) -> Result<String> {
        let content =
            serde_json::to_string_pretty(&self.entries).context("Failed to serialize JSON")?;
        Ok(format!("{}\n", content))
    }

    /// Replace the file on disk with the current table.
    ///
    /// The content goes to a temporary file next to the target which is then
    /// renamed over it, so the original stays intact until the new one is
    /// complete. Symlinks are followed and the target keeps its permissions.
    pub fn save(&self) -> Result<()> {
        let content = self.render()?;
        let target = fs::canonicalize(&self.file_path)
            .with_context(|| format!("Failed to resolve file: {}", self.file_path.display()))?;
        let permissions = fs::metadata(&target)
            .with_context(|| format!("Failed to read metadata: {}", target.display()))?
            .permissions();
        let dir = target.parent().unwrap_or(Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().set_permissions(permissions))
            .and_then(|_| tmp.as_file().sync_all())
            .with_context(|| format!("Failed to write temporary file: {}", tmp.path().display()))?;
        tmp.persist(&target)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;

        Ok(())
    }
}
