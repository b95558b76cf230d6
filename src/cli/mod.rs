pub mod completions;
pub mod plan;
pub mod scan;
pub mod validate;

use clap::{Parser, Subcommand};

/// sprig - CSS sprite extraction tool
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract sprite image descriptors from stylesheets
    Scan(scan::ScanArgs),

    /// Show density groups and the spritesheets they resolve to
    Plan(plan::PlanArgs),

    /// Check stylesheets for sprite pipeline problems
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
