use clap::Parser;
use miette::Result;
use sprig::cli::{Cli, Commands};
use sprig::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Scan(args) => sprig::cli::scan::run(args, &printer)?,
        Commands::Plan(args) => sprig::cli::plan::run(args, &printer)?,
        Commands::Validate(args) => sprig::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => sprig::cli::completions::run(args)?,
    }

    Ok(())
}
