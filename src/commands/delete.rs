use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::core::store::{NoteStore, StoreError};

pub fn run(dir: PathBuf, title: &str) -> Result<()> {
    let store = NoteStore::new(dir);

    match store.delete(title) {
        Ok(filename) => {
            println!(
                "{} Deleted note \"{}\" ({})",
                "✓".green(),
                title.bold(),
                filename
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
