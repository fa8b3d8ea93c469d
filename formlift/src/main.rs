// formlift/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug formlift run ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            project_dir,
            select,
        } => commands::run::execute(project_dir, select).await,

        Commands::Validate {
            project_dir,
            document,
            edited,
        } => commands::validate::execute(project_dir, document, edited),

        Commands::Export { edited, output } => commands::export::execute(edited, output),

        Commands::Inspect {
            project_dir,
            document,
        } => commands::inspect::execute(project_dir, document),

        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
