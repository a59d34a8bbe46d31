//! stepcalc CLI
//!
//! Command-line interface for the resumable calculator

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Debug, Parser)]
#[command(name = "stepcalc")]
#[command(about = "stepcalc - a calculator session that survives being killed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the interactive session, resuming any interrupted command
    Run(commands::run::RunArgs),
    /// Print the checkpoint of the in-flight command
    Inspect(commands::slot::SlotArgs),
    /// Discard the in-flight command and start the next session fresh
    Reset(commands::slot::SlotArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Inspect(args) => commands::slot::execute_inspect(args),
        Commands::Reset(args) => commands::slot::execute_reset(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
