//! Sprite image descriptors and reference classification.

use serde::Serialize;

/// One background image extracted from a stylesheet rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteImage {
    /// Selector of the rule the image was found in.
    pub selector: String,
    /// Image reference, unquoted and query-stripped.
    pub url: String,
    /// Device-pixel ratio from the reference's density suffix.
    pub ratio: u32,
    /// Colour literal found alongside the url, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Line the rule starts on (1-indexed).
    pub line: u32,
}

/// Classification of an image reference found in a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// Relative or bare path the pipeline can read and composite.
    Local,
    /// Absolute URL with a scheme (`http://`, `https://`, ...).
    Remote,
    /// Inline `data:` URI.
    Data,
}

impl RefKind {
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with("data:") {
            RefKind::Data
        } else if reference.contains("://") {
            RefKind::Remote
        } else {
            RefKind::Local
        }
    }
}

/// Whether a reference points at a file the pipeline can composite.
pub fn is_supported(reference: &str) -> bool {
    RefKind::classify(reference) == RefKind::Local
}

/// Whether the reference carries a density suffix above 1.
pub fn is_retina(reference: &str) -> bool {
    retina_ratio(reference) > 1
}

/// Device-pixel ratio encoded in the reference's filename.
///
/// The suffix must sit at the very end of the file stem, immediately
/// before the extension: `icon@2x.png` → 2, `icon.png` → 1. `@` markers
/// elsewhere in the name are ignored, so `te@2xst.png` stays at 1.
/// Total: suffixes that would yield 0 or overflow also come back as 1.
pub fn retina_ratio(reference: &str) -> u32 {
    parse_density_suffix(file_stem(reference)).unwrap_or(1)
}

/// Filename without directories or the final extension.
fn file_stem(reference: &str) -> &str {
    let name = reference.rsplit('/').next().unwrap_or(reference);
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Parse a trailing `@<digits>x` off a file stem.
fn parse_density_suffix(stem: &str) -> Option<u32> {
    let before_x = stem.strip_suffix('x')?;
    let at = before_x.rfind('@')?;
    let digits = &before_x[at + 1..];

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&ratio| ratio > 0)
}
