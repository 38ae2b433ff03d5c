mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{export, init, list, show, ExportArgs, InitArgs};

/// cvforge CLI - resume store tooling
#[derive(Parser, Debug)]
#[command(name = "cvforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the store file
    #[arg(short, long, default_value = "cvforge.json", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new store file with a sample resume
    Init(InitArgs),

    /// List saved resumes in the catalog
    List,

    /// Show the active resume
    Show,

    /// Export the active resume
    Export(ExportArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init(args) => init::run(args, &cli.file),
        Command::List => list::run(&cli.file),
        Command::Show => show::run(&cli.file),
        Command::Export(args) => export::run(args, &cli.file),
    }
}
