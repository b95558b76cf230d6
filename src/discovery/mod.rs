//! Stylesheet discovery for sprig projects.
//!
//! Finds the `.css` files a command should operate on, either from a
//! `sprig.yaml` manifest's source directories or from paths given on
//! the command line.

mod manifest;

pub use manifest::Manifest;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "sprig.yaml";

/// Result of discovering stylesheets in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no sprig.yaml was found).
    pub manifest: Manifest,

    /// Whether a sprig.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered stylesheets, sorted.
    pub stylesheets: Vec<PathBuf>,
}

/// Discover stylesheets in a project directory.
///
/// Looks for a `sprig.yaml` manifest in the root directory. If found,
/// scans the manifest's source paths; otherwise scans the whole
/// directory for `.css` files.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let mut stylesheets = Vec::new();
    for source in manifest.effective_sources() {
        stylesheets.extend(scan_directory(&root.join(source), &manifest));
    }
    stylesheets.sort();
    stylesheets.dedup();

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        stylesheets,
    })
}

/// Discover stylesheets from specific paths (no manifest lookup).
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut stylesheets = Vec::new();

    for path in paths {
        if path.is_dir() {
            stylesheets.extend(scan_directory(path, &manifest));
        } else if is_stylesheet(path) {
            stylesheets.push(path.clone());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        stylesheets,
    })
}

/// Recursively scan a directory for `.css` files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut found = Vec::new();

    if !root.exists() {
        return found;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }
        if is_stylesheet(path) {
            found.push(path.to_path_buf());
        }
    }

    found.sort();
    found
}

fn is_stylesheet(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("css")
}
