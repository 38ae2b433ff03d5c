use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use cvforge_persist::{FileStorage, PersistenceEngine};
use cvforge_store::Store;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name for the first resume
    #[arg(short, long, default_value = "Sample resume")]
    pub name: String,

    /// Start from an empty resume instead of the sample content
    #[arg(long)]
    pub empty: bool,

    /// Overwrite an existing store file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, path: &Path) -> Result<()> {
    if path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            path.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let engine = PersistenceEngine::new(Box::new(FileStorage::new(path)));
    let mut store = Store::with_persistence(engine);

    if !args.empty {
        store.load_sample();
    }
    store.complete_onboarding(Some(&args.name));
    store.flush();

    println!(
        "  {} Created {} with resume {}",
        "✓".green(),
        path.display().to_string().bright_white(),
        args.name.bright_blue()
    );
    Ok(())
}
