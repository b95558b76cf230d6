//! Scan command implementation.
//!
//! Extracts sprite descriptors from stylesheets and prints them as a
//! JSON array on stdout. With `--watch`, keeps running and re-scans
//! whenever a watched stylesheet changes.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;

use clap::Args;

use crate::collect::collect_images;
use crate::discovery::{discover, discover_paths};
use crate::error::{Result, SprigError};
use crate::output::{display_path, plural, Printer};
use crate::types::SpriteImage;

/// Extract sprite image descriptors from stylesheets
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Stylesheets or directories to scan (default: current directory)
    pub files: Vec<PathBuf>,

    /// Re-scan whenever a stylesheet changes
    #[arg(long)]
    pub watch: bool,
}

pub fn run(args: ScanArgs, printer: &Printer) -> Result<()> {
    let stylesheets = resolve_stylesheets(&args.files)?;

    scan_once(&stylesheets, printer)?;

    if args.watch {
        watch(&stylesheets, printer)?;
    }

    Ok(())
}

fn resolve_stylesheets(files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let discovery = if files.is_empty() {
        discover(".")?
    } else {
        discover_paths(files)?
    };
    Ok(discovery.stylesheets)
}

/// Scan every stylesheet and print the combined descriptor list.
fn scan_once(stylesheets: &[PathBuf], printer: &Printer) -> Result<()> {
    let mut images: Vec<SpriteImage> = Vec::new();

    for path in stylesheets {
        printer.status("Scanning", &display_path(path));
        let source = fs::read_to_string(path).map_err(|e| SprigError::Io {
            path: path.clone(),
            message: format!("Failed to read stylesheet: {}", e),
        })?;
        images.extend(collect_images(&source).images);
    }

    let json = serde_json::to_string_pretty(&images).map_err(|e| SprigError::Output {
        message: format!("Failed to serialize descriptors: {}", e),
    })?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    printer.success("Found", &plural(images.len(), "image", "images"));
    Ok(())
}

/// Block on the file watcher, re-scanning after every change.
fn watch(stylesheets: &[PathBuf], printer: &Printer) -> Result<()> {
    use notify::{RecursiveMode, Watcher};

    let (tx, rx) = mpsc::channel();
    let mut watcher =
        notify::recommended_watcher(tx).map_err(|e| SprigError::Watch(e.to_string()))?;

    for path in stylesheets {
        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| SprigError::Watch(e.to_string()))?;
    }

    printer.info(
        "Watching",
        &plural(stylesheets.len(), "stylesheet", "stylesheets"),
    );

    for event in rx {
        match event {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                if let Err(e) = scan_once(stylesheets, printer) {
                    printer.error("Failed", &e.to_string());
                }
            }
            Ok(_) => {}
            Err(e) => printer.error("Watch", &e.to_string()),
        }
    }

    Ok(())
}
