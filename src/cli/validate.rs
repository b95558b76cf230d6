//! Validate command implementation.
//!
//! Runs every stylesheet through the validation checks and prints the
//! diagnostics. Exits non-zero when any error-severity diagnostic is
//! found.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{Result, SprigError};
use crate::output::{display_path, plural, Printer};
use crate::validation::{validate_stylesheet, Severity, ValidationResult};

/// Check stylesheets for sprite pipeline problems
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Stylesheets or directories to validate (default: current directory)
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)?
    };

    let mut totals = ValidationResult::new();

    for path in &discovery.stylesheets {
        let source = fs::read_to_string(path).map_err(|e| SprigError::Io {
            path: path.clone(),
            message: format!("Failed to read stylesheet: {}", e),
        })?;

        let result = validate_stylesheet(&source);
        print_diagnostics(path, &result, printer);
        totals.merge(result);
    }

    if totals.is_ok() {
        printer.success(
            "Validated",
            &plural(discovery.stylesheets.len(), "stylesheet", "stylesheets"),
        );
        return Ok(());
    }

    let summary = format!(
        "{}, {}",
        plural(totals.error_count(), "error", "errors"),
        plural(totals.warning_count(), "warning", "warnings")
    );
    printer.warning("Finished", &summary);

    if totals.has_errors() {
        return Err(SprigError::Validation {
            message: summary,
            help: Some("Fix the errors above and re-run".to_string()),
        });
    }

    Ok(())
}

fn print_diagnostics(path: &std::path::Path, result: &ValidationResult, printer: &Printer) {
    for diagnostic in result.iter() {
        let label = printer.severity(
            &diagnostic.severity.to_string(),
            diagnostic.severity == Severity::Error,
        );
        let place = match diagnostic.location {
            Some(location) => format!("{}:{}", display_path(path), location),
            None => display_path(path),
        };

        eprintln!(
            "{} {}: {} {}",
            label,
            printer.dim(&diagnostic.code),
            diagnostic.message,
            printer.cyan(&place)
        );
        if let Some(help) = &diagnostic.help {
            eprintln!("  help: {}", help);
        }
    }
}
