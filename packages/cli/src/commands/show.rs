use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use cvforge_export::build_blocks;

use super::open_store;

pub fn run(path: &Path) -> Result<()> {
    let store = open_store(path)?;
    let state = store.state();

    let active_name = state
        .active_resume_id
        .as_ref()
        .and_then(|id| state.saved_resumes.iter().find(|s| &s.id == id))
        .map(|s| s.name.as_str())
        .unwrap_or("(no active resume)");
    println!("{}", active_name.bright_blue().bold());

    for block in build_blocks(&state.tracked()) {
        println!();
        println!("{}", block.title.bright_white().bold());
        for paragraph in &block.paragraphs {
            if paragraph.bold {
                println!("  {}", paragraph.text.bold());
            } else {
                println!("  {}", paragraph.text);
            }
        }
    }
    Ok(())
}
