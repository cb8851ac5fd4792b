use std::path::PathBuf;

use anyhow::{Context, Result};

use super::slug::slugify;

/// Directory name under the home directory used when no --dir is given.
pub const DEFAULT_DIR_NAME: &str = "dev-notes";

/// Resolved location of the notes directory.
///
/// Passed explicitly at construction so tests can point the store at a
/// temporary directory.
#[derive(Debug, Clone)]
pub struct NotesPaths {
    pub root: PathBuf,
}

impl NotesPaths {
    pub fn from_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default notes directory: `~/dev-notes`.
    pub fn default_root() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to resolve home directory")?;
        Ok(home.join(DEFAULT_DIR_NAME))
    }

    /// Full path for the note addressed by `title`.
    pub fn note_path(&self, title: &str) -> PathBuf {
        self.root.join(slugify(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_path_uses_slug() {
        let paths = NotesPaths::from_root(PathBuf::from("/tmp/notes"));
        assert_eq!(
            paths.note_path("Project Ideas"),
            PathBuf::from("/tmp/notes/project-ideas.md")
        );
    }
}
