//! Filesystem note store
//!
//! The store is the only reader/writer of the notes directory. Every
//! operation re-resolves the target file from the title; there is no
//! in-memory cache or index, so external edits are visible on the next
//! call. Concurrent writes to the same title are last-write-wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;

use super::paths::NotesPaths;
use super::slug::{display_title, slugify};

/// Prefix marking the optional tag line at the top of a note.
pub const TAG_PREFIX: &str = "Tags: ";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file addressed by the title could not be read or removed.
    /// Deliberately does not distinguish a missing file from an
    /// unreadable one — the caller sees one "not found" shape.
    #[error("Note \"{title}\" not found (looked for {filename} in {})", .dir.display())]
    NotFound {
        title: String,
        filename: String,
        dir: PathBuf,
    },

    /// Any other storage failure (permissions, disk full, directory
    /// creation), with the underlying cause attached.
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn storage(context: impl Into<String>, source: io::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }
}

/// One note as seen by `list`: display title, filename, mtime.
#[derive(Debug, Serialize)]
pub struct NoteEntry {
    pub title: String,
    pub filename: String,
    pub modified: DateTime<Local>,
}

impl NoteEntry {
    /// Listing line: `- Title (filename) — modified 8/26/2026`
    pub fn summary(&self) -> String {
        format!(
            "- {} ({}) — modified {}",
            self.title,
            self.filename,
            self.modified.format("%-m/%-d/%Y")
        )
    }
}

/// Markdown note store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    paths: NotesPaths,
}

impl NoteStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            paths: NotesPaths::from_root(root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.paths.root
    }

    /// Lazily create the notes directory. Idempotent.
    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.paths.root)
            .map_err(|e| StoreError::storage("Failed to create notes directory", e))
    }

    fn not_found(&self, title: &str) -> StoreError {
        StoreError::NotFound {
            title: title.to_string(),
            filename: slugify(title),
            dir: self.paths.root.clone(),
        }
    }

    /// Write `content` to the note's file, fully replacing any existing
    /// content. Returns the resolved path.
    pub fn save(&self, title: &str, content: &str) -> Result<PathBuf, StoreError> {
        self.ensure_dir()?;
        let path = self.paths.note_path(title);
        fs::write(&path, content)
            .map_err(|e| StoreError::storage(format!("Failed to write {}", path.display()), e))?;
        Ok(path)
    }

    /// Enumerate all `.md` files directly inside the notes directory,
    /// sorted alphabetically by filename. Directory enumeration order is
    /// platform-dependent, so the sort makes listing output stable.
    pub fn list(&self) -> Result<Vec<NoteEntry>, StoreError> {
        self.ensure_dir()?;
        let dir = fs::read_dir(&self.paths.root)
            .map_err(|e| StoreError::storage("Failed to read notes directory", e))?;

        let mut entries = Vec::new();
        for entry in dir.flatten() {
            let path = entry.path();
            let Some(filename) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if !filename.ends_with(".md") || !path.is_file() {
                continue;
            }
            let metadata = entry
                .metadata()
                .map_err(|e| StoreError::storage(format!("Failed to stat {}", path.display()), e))?;
            let modified = metadata
                .modified()
                .map_err(|e| StoreError::storage(format!("Failed to stat {}", path.display()), e))?;

            entries.push(NoteEntry {
                title: display_title(filename),
                filename: filename.to_string(),
                modified: DateTime::from(modified),
            });
        }

        entries.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(entries)
    }

    /// Read the full note content, tag line included.
    pub fn read(&self, title: &str) -> Result<String, StoreError> {
        let path = self.paths.note_path(title);
        fs::read_to_string(&path).map_err(|_| self.not_found(title))
    }

    /// Remove the note's file. Returns the filename that was removed.
    pub fn delete(&self, title: &str) -> Result<String, StoreError> {
        let path = self.paths.note_path(title);
        fs::remove_file(&path).map_err(|_| self.not_found(title))?;
        Ok(slugify(title))
    }

    /// Set the note's tag line, replacing any existing one. Never creates
    /// a note: a missing target is a not-found error. Returns the applied
    /// comma-joined tag list.
    pub fn tag(&self, title: &str, tags: &[String]) -> Result<String, StoreError> {
        let path = self.paths.note_path(title);
        let existing = fs::read_to_string(&path).map_err(|_| self.not_found(title))?;

        let joined = tags.join(", ");
        let tag_line = format!("{TAG_PREFIX}{joined}");
        let updated = apply_tag_line(&existing, &tag_line);

        fs::write(&path, updated)
            .map_err(|e| StoreError::storage(format!("Failed to write {}", path.display()), e))?;
        Ok(joined)
    }
}

/// Replace the first line if it is already a tag line, otherwise insert
/// the new tag line above all existing lines. Idempotent for a fixed tag
/// list: tags are overwritten, never accumulated.
fn apply_tag_line(content: &str, tag_line: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.first().is_some_and(|l| l.starts_with(TAG_PREFIX)) {
        lines[0] = tag_line;
    } else {
        lines.insert(0, tag_line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, NoteStore) {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(dir.path().join("notes"));
        (dir, store)
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_save_read_round_trip() {
        let (_dir, store) = store();
        let path = store.save("Project Ideas", "# Ideas\n- CLI").unwrap();

        assert_eq!(path.file_name().unwrap(), "project-ideas.md");
        assert_eq!(store.read("Project Ideas").unwrap(), "# Ideas\n- CLI");
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, store) = store();
        store.save("Note", "first").unwrap();
        store.save("Note", "second").unwrap();

        assert_eq!(store.read("Note").unwrap(), "second");
    }

    #[test]
    fn test_save_creates_directory_lazily() {
        let (_dir, store) = store();
        assert!(!store.root().exists());
        store.save("Note", "body").unwrap();
        assert!(store.root().exists());
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let (_dir, store) = store();
        let err = store.read("No Such Note").unwrap_err();

        match &err {
            StoreError::NotFound { title, filename, .. } => {
                assert_eq!(title, "No Such Note");
                assert_eq!(filename, "no-such-note.md");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("\"No Such Note\" not found"));
        assert!(msg.contains("no-such-note.md"));
    }

    #[test]
    fn test_delete_then_read_and_delete_fail() {
        let (_dir, store) = store();
        store.save("Test Note", "body").unwrap();

        assert_eq!(store.delete("Test Note").unwrap(), "test-note.md");
        assert!(matches!(
            store.read("Test Note"),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete("Test Note"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let (_dir, store) = store();
        store.save("Test Note", "a").unwrap();
        store.save("Another One", "b").unwrap();
        std::fs::write(store.root().join("ignore.txt"), "x").unwrap();

        let entries = store.list().unwrap();
        let filenames: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(filenames, vec!["another-one.md", "test-note.md"]);
        assert_eq!(entries[0].title, "Another One");
        assert_eq!(entries[1].title, "Test Note");
    }

    #[test]
    fn test_list_reflects_deletion() {
        let (_dir, store) = store();
        store.save("Test Note", "a").unwrap();
        store.save("Another One", "b").unwrap();
        store.delete("Test Note").unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].filename, "another-one.md");
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_entry_summary_format() {
        let (_dir, store) = store();
        store.save("Test Note", "a").unwrap();

        let entries = store.list().unwrap();
        let line = entries[0].summary();
        assert!(line.starts_with("- Test Note (test-note.md) — modified "));
    }

    #[test]
    fn test_tag_prepends_line() {
        let (_dir, store) = store();
        store.save("Project Ideas", "# Ideas\n- CLI").unwrap();

        let applied = store.tag("Project Ideas", &tags(&["cli", "tools"])).unwrap();
        assert_eq!(applied, "cli, tools");
        assert_eq!(
            store.read("Project Ideas").unwrap(),
            "Tags: cli, tools\n# Ideas\n- CLI"
        );
    }

    #[test]
    fn test_tag_replaces_not_accumulates() {
        let (_dir, store) = store();
        store.save("Note", "body").unwrap();
        store.tag("Note", &tags(&["a", "b"])).unwrap();
        store.tag("Note", &tags(&["c"])).unwrap();

        let content = store.read("Note").unwrap();
        assert_eq!(content, "Tags: c\nbody");
        assert!(!content.contains("Tags: a"));
    }

    #[test]
    fn test_tag_idempotent() {
        let (_dir, store) = store();
        store.save("Note", "line one\nline two").unwrap();

        store.tag("Note", &tags(&["rust"])).unwrap();
        let once = store.read("Note").unwrap();
        store.tag("Note", &tags(&["rust"])).unwrap();
        let twice = store.read("Note").unwrap();

        assert_eq!(once, twice);
        assert_eq!(once, "Tags: rust\nline one\nline two");
    }

    #[test]
    fn test_tag_empty_list() {
        let (_dir, store) = store();
        store.save("Note", "body").unwrap();
        store.tag("Note", &[]).unwrap();

        assert_eq!(store.read("Note").unwrap(), "Tags: \nbody");
    }

    #[test]
    fn test_tag_missing_note_never_creates() {
        let (_dir, store) = store();
        store.save("Other", "x").unwrap();

        assert!(matches!(
            store.tag("Ghost", &tags(&["a"])),
            Err(StoreError::NotFound { .. })
        ));
        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_tag_empty_file() {
        let (_dir, store) = store();
        store.save("Note", "").unwrap();
        store.tag("Note", &tags(&["solo"])).unwrap();

        assert_eq!(store.read("Note").unwrap(), "Tags: solo\n");
    }

    #[test]
    fn test_apply_tag_line() {
        assert_eq!(apply_tag_line("body", "Tags: a"), "Tags: a\nbody");
        assert_eq!(apply_tag_line("Tags: old\nbody", "Tags: a"), "Tags: a\nbody");
        // A tag line further down is untouched
        assert_eq!(
            apply_tag_line("intro\nTags: old", "Tags: a"),
            "Tags: a\nintro\nTags: old"
        );
    }

    #[test]
    fn test_colliding_titles_share_a_file() {
        let (_dir, store) = store();
        store.save("Test Note", "first").unwrap();
        store.save("test note!", "second").unwrap();

        assert_eq!(store.read("Test Note").unwrap(), "second");
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
