//! Project manifest (sprig.yaml) parsing.
//!
//! The manifest defines project configuration: where stylesheets live,
//! where the assembled spritesheet goes, and what it is called.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SprigError};
use crate::types::{SheetOptions, DEFAULT_SHEET_NAME};

/// Project manifest loaded from sprig.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for stylesheets.
    /// Defaults to the current directory if empty.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Directory the assembled spritesheet is written to.
    #[serde(default = "default_sprite_path")]
    pub sprite_path: String,

    /// Base spritesheet name, without extension.
    #[serde(default = "default_name")]
    pub name: String,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_sprite_path() -> String {
    ".".to_string()
}

fn default_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            sprite_path: default_sprite_path(),
            name: default_name(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a sprig.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SprigError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SprigError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check sprig.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir))
                    || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix) || path.ends_with(suffix);
        }

        if pattern.starts_with('*') && !pattern.contains('/') {
            // Match file extension or suffix
            return path.ends_with(&pattern[1..]);
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            // Match directory contents
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        // Exact match or contains
        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Spritesheet naming options derived from the manifest.
    pub fn sheet_options(&self) -> SheetOptions {
        SheetOptions {
            sprite_path: self.sprite_path.clone().into(),
            name: self.name.clone(),
        }
    }
}
