//! Plan command implementation.
//!
//! Groups extracted images by density and reports the spritesheet each
//! group resolves to, without assembling anything.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::collect::{collect_images, group_by_ratio};
use crate::discovery::{discover, discover_paths};
use crate::error::{Result, SprigError};
use crate::output::{plural, Printer};
use crate::types::SpriteImage;

/// Show density groups and the spritesheets they resolve to
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Stylesheets or directories to plan from (default: current directory)
    pub files: Vec<PathBuf>,

    /// Emit the plan as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// One spritesheet in the plan.
#[derive(Debug, Serialize)]
struct PlanEntry {
    ratio: u32,
    spritesheet: String,
    images: Vec<String>,
}

pub fn run(args: PlanArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)?
    };
    let options = discovery.manifest.sheet_options();

    let mut images: Vec<SpriteImage> = Vec::new();
    for path in &discovery.stylesheets {
        let source = fs::read_to_string(path).map_err(|e| SprigError::Io {
            path: path.clone(),
            message: format!("Failed to read stylesheet: {}", e),
        })?;
        images.extend(collect_images(&source).images);
    }

    let groups = group_by_ratio(images);

    if args.json {
        let entries: Vec<PlanEntry> = groups
            .iter()
            .map(|group| PlanEntry {
                ratio: group.ratio,
                spritesheet: group.spritesheet(&options),
                images: group.references().iter().map(|r| r.to_string()).collect(),
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries).map_err(|e| SprigError::Output {
            message: format!("Failed to serialize plan: {}", e),
        })?;
        println!("{}", json);
        return Ok(());
    }

    if groups.is_empty() {
        printer.info("Plan", "no sprite images found");
        return Ok(());
    }

    for group in &groups {
        let references = group.references();
        printer.info(
            &format!("@{}x", group.ratio),
            &format!(
                "{} {} {}",
                printer.bold(&group.spritesheet(&options)),
                printer.dim("<-"),
                plural(references.len(), "image", "images")
            ),
        );
    }
    printer.success(
        "Planned",
        &plural(groups.len(), "spritesheet", "spritesheets"),
    );

    Ok(())
}
