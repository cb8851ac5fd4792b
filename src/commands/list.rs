use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::core::store::NoteStore;

pub fn run(dir: PathBuf, json: bool) -> Result<()> {
    let store = NoteStore::new(dir);
    let entries = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No notes found in {}", store.root().display());
        return Ok(());
    }

    println!("{}", format!("Notes in {}:", store.root().display()).bold());
    println!();
    for entry in &entries {
        println!("{}", entry.summary());
    }
    println!();
    println!("{} notes", entries.len().to_string().cyan());
    Ok(())
}
