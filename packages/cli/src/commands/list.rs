use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::open_store;

pub fn run(path: &Path) -> Result<()> {
    let store = open_store(path)?;
    let state = store.state();

    if state.saved_resumes.is_empty() {
        println!("No saved resumes yet");
        return Ok(());
    }

    for saved in &state.saved_resumes {
        let marker = if state.active_resume_id.as_deref() == Some(saved.id.as_str()) {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{} {}  {}  updated {}",
            marker,
            saved.name.bright_white(),
            saved.id.dimmed(),
            saved.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
    Ok(())
}
