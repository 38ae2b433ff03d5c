use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use cvforge_export::{build_blocks, JsonExporter, ResumeExporter};

use super::open_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: Format,

    /// Output path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, path: &Path) -> Result<()> {
    let store = open_store(path)?;
    let snapshot = store.state().tracked();

    let bytes = match args.format {
        Format::Json => JsonExporter.export(&snapshot)?,
        Format::Text => {
            let mut out = String::new();
            for block in build_blocks(&snapshot) {
                out.push_str(&block.title.to_uppercase());
                out.push('\n');
                for paragraph in &block.paragraphs {
                    out.push_str(&paragraph.text);
                    out.push('\n');
                }
                out.push('\n');
            }
            out.into_bytes()
        }
    };

    match args.output {
        Some(output) => {
            std::fs::write(&output, bytes)?;
            println!(
                "  {} Exported to {}",
                "✓".green(),
                output.display().to_string().bright_white()
            );
        }
        None => {
            print!("{}", String::from_utf8_lossy(&bytes));
        }
    }
    Ok(())
}
