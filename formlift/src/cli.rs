// formlift/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formlift")]
#[command(about = "Schema & Validation Inference for AI-Extracted Form Data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Ingests extraction responses (normalize -> schema -> rules)
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Ingest only a specific document (file stem, ex: "atm_card_form")
        #[arg(long, short)]
        select: Option<String>,
    },

    /// ✅ Validates an edited data tree against a document's ruleset
    Validate {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Document name (file stem used during `run`)
        #[arg(long, short)]
        document: String,

        /// Path to the edited data JSON
        #[arg(long, short)]
        edited: PathBuf,
    },

    /// 📤 Exports the final edited tree as formatted JSON
    Export {
        /// Path to the edited data JSON
        #[arg(long, short)]
        edited: PathBuf,

        /// Output file
        #[arg(long, short)]
        output: PathBuf,
    },

    /// 🔍 Inspects an inferred schema (field / type / title table)
    Inspect {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Document name (file stem used during `run`)
        #[arg(long, short)]
        document: String,
    },

    /// 🧹 Cleans generated artifacts (target/ folder)
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_run_defaults() -> Result<()> {
        let args = Cli::parse_from(["formlift", "run"]);
        match args.command {
            Commands::Run {
                project_dir,
                select,
            } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert_eq!(select, None);
                Ok(())
            }
            _ => bail!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_run_select() -> Result<()> {
        let args = Cli::parse_from([
            "formlift",
            "run",
            "--select",
            "atm_card_form",
            "--project-dir",
            "/tmp",
        ]);
        match args.command {
            Commands::Run {
                project_dir,
                select,
            } => {
                assert_eq!(project_dir.to_string_lossy(), "/tmp");
                assert_eq!(select, Some("atm_card_form".to_string()));
                Ok(())
            }
            _ => bail!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_validate() -> Result<()> {
        let args = Cli::parse_from([
            "formlift",
            "validate",
            "--document",
            "atm_card_form",
            "--edited",
            "edited.json",
        ]);
        match args.command {
            Commands::Validate {
                document, edited, ..
            } => {
                assert_eq!(document, "atm_card_form");
                assert_eq!(edited.to_string_lossy(), "edited.json");
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_export() -> Result<()> {
        let args = Cli::parse_from([
            "formlift",
            "export",
            "--edited",
            "edited.json",
            "--output",
            "final.json",
        ]);
        match args.command {
            Commands::Export { edited, output } => {
                assert_eq!(edited.to_string_lossy(), "edited.json");
                assert_eq!(output.to_string_lossy(), "final.json");
                Ok(())
            }
            _ => bail!("Expected Export command"),
        }
    }
}
