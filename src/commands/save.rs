use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::core::store::NoteStore;

pub fn run(dir: PathBuf, title: &str, content: &str) -> Result<()> {
    let content = if content == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        content.to_string()
    };

    let store = NoteStore::new(dir);
    let path = store.save(title, &content)?;

    println!(
        "{} Saved note \"{}\" to {}",
        "✓".green(),
        title.bold(),
        path.display()
    );
    Ok(())
}
