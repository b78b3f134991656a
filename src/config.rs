use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keyprunerc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_strings_file")]
    pub strings_file: String,
    #[serde(default = "default_exempt_patterns")]
    pub exempt_patterns: Vec<String>,
    #[serde(default = "default_stripped_prefixes")]
    pub stripped_prefixes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_roots() -> Vec<String> {
    [".", "../K2CrashHandler"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}

fn default_strings_file() -> String {
    "Assets/Strings/fr.json".to_string()
}

fn default_exempt_patterns() -> Vec<String> {
    [
        "/DevicesPage/Devices/Manager/Labels/",
        "/SharedStrings/Joints/",
    ]
    .map(String::from)
    .to_vec()
}

fn default_stripped_prefixes() -> Vec<String> {
    vec!["/CrashHandler/".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_roots: default_source_roots(),
            extensions: default_extensions(),
            strings_file: default_strings_file(),
            exempt_patterns: default_exempt_patterns(),
            stripped_prefixes: default_stripped_prefixes(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// strings file is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.strings_file.trim().is_empty() {
            anyhow::bail!("'stringsFile' must not be empty");
        }

        Ok(())
    }

    /// Extensions without a leading dot, empty entries dropped.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
