use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::core::store::{NoteStore, StoreError};

pub fn run(dir: PathBuf, title: &str, tags: &[String]) -> Result<()> {
    let store = NoteStore::new(dir);

    match store.tag(title, tags) {
        Ok(applied) => {
            println!(
                "{} Tagged \"{}\" with: {}",
                "✓".green(),
                title.bold(),
                applied.cyan()
            );
            Ok(())
        }
        Err(e @ StoreError::NotFound { .. }) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
