use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::core::store::{NoteStore, StoreError};

pub fn run(dir: PathBuf, title: &str) -> Result<()> {
    let store = NoteStore::new(dir);

    match store.read(title) {
        // Raw content, no decoration, so output can be piped
        Ok(content) => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(e @ StoreError::NotFound { .. }) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
