//! Knowledgebase importer main executable

pub mod common;
pub mod err;
pub mod kb;

use clap::{Args, Parser, Subcommand};
use console::{Emoji, Term};

/// CLI parser based on clap.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Cancer knowledgebase importer",
    long_about = "This tool reads curated cancer-genomics knowledgebases and normalizes gene names"
)]
struct Cli {
    /// Commonly used arguments
    #[command(flatten)]
    common: common::Args,

    /// The sub command to run
    #[command(subcommand)]
    command: Commands,
}

/// Enum supporting the parsing of top-level commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Knowledgebase-related commands.
    Kb(Kb),
}

/// Parsing of "kb *" sub commands.
#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
struct Kb {
    /// The sub command to run
    #[command(subcommand)]
    command: KbCommands,
}

/// Enum supporting the parsing of "kb *" sub commands.
#[derive(Debug, Subcommand)]
enum KbCommands {
    Correct(kb::cli::Args),
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Build a tracing subscriber according to the configuration in `cli.common`.
    let collector = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(common::tracing_level(&cli.common.verbose))
        .compact()
        .finish();

    // Install collector and go into sub commands.
    let term = Term::stderr();
    tracing::subscriber::with_default(collector, || {
        tracing::debug!("kb-importer {}", common::VERSION);
        match &cli.command {
            Commands::Kb(kb) => match &kb.command {
                KbCommands::Correct(args) => kb::cli::run(&cli.common, args)?,
            },
        }

        Ok::<(), anyhow::Error>(())
    })?;
    term.write_line(&format!("All done. Have a nice day!{}", Emoji(" 😃", "")))?;

    Ok(())
}
