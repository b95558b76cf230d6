//! Spritesheet output naming.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Base name used when none is configured.
pub const DEFAULT_SHEET_NAME: &str = "sprite";

/// Options controlling where spritesheets go and what they are called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetOptions {
    /// Directory the assembled spritesheet is written to.
    pub sprite_path: PathBuf,
    /// Base filename, without extension.
    pub name: String,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            sprite_path: PathBuf::from("."),
            name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl SheetOptions {
    pub fn new(sprite_path: impl Into<PathBuf>) -> Self {
        Self {
            sprite_path: sprite_path.into(),
            ..Self::default()
        }
    }

    /// Spritesheet filename for a set of density suffixes.
    ///
    /// No suffixes yields `sprite.png`. Suffixes are dot-joined in
    /// order, each keeping its leading `@`: `["@2x"]` → `sprite.@2x.png`.
    pub fn filename(&self, suffixes: &[&str]) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(suffixes.len() + 2);
        parts.push(self.name.as_str());
        parts.extend_from_slice(suffixes);
        parts.push("png");
        parts.join(".")
    }

    /// Full output path: `sprite_path` joined with [`filename`].
    ///
    /// [`filename`]: Self::filename
    pub fn output_path(&self, suffixes: &[&str]) -> PathBuf {
        self.sprite_path.join(self.filename(suffixes))
    }
}
