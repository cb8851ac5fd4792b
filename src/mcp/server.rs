//! Dev Notes MCP Server implementation

use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;

use crate::core::store::{NoteStore, StoreError};

/// Parameters for save_note tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveNoteParams {
    /// Note title (e.g., "Project Ideas")
    #[schemars(description = "Title of the note (used as filename)")]
    pub title: String,
    #[schemars(description = "Markdown content of the note")]
    pub content: String,
}

/// Parameters for read_note tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadNoteParams {
    #[schemars(description = "Title of the note to read")]
    pub title: String,
}

/// Parameters for delete_note tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteNoteParams {
    #[schemars(description = "Title of the note to delete")]
    pub title: String,
}

/// Parameters for tag_note tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TagNoteParams {
    #[schemars(description = "Title of the note to tag")]
    pub title: String,
    /// Replaces any existing tag line; order is preserved
    #[schemars(description = "List of tags to apply")]
    pub tags: Vec<String>,
}

/// Dev Notes MCP Service
#[derive(Clone)]
pub struct NotesService {
    notes_dir: PathBuf,
    tool_router: ToolRouter<Self>,
}

impl NotesService {
    pub fn new(notes_dir: PathBuf) -> Self {
        Self {
            notes_dir,
            tool_router: Self::tool_router(),
        }
    }

    fn store(&self) -> NoteStore {
        NoteStore::new(self.notes_dir.clone())
    }
}

/// Store errors become error-flagged tool results, never protocol faults.
fn tool_error(err: StoreError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(err.to_string())])
}

#[tool_router]
impl NotesService {
    /// Save (or fully overwrite) a markdown note
    #[tool(
        description = "Save a markdown note to the notes directory. The title is slugified into the filename; saving an existing title replaces its content."
    )]
    async fn save_note(
        &self,
        params: Parameters<SaveNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let SaveNoteParams { title, content } = params.0;
        match self.store().save(&title, &content) {
            Ok(path) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Saved note \"{}\" to {}",
                title,
                path.display()
            ))])),
            Err(e) => Ok(tool_error(e)),
        }
    }

    /// List all notes with their last-modified dates
    #[tool(description = "List all saved notes in the notes directory with last-modified dates.")]
    async fn list_notes(&self) -> Result<CallToolResult, McpError> {
        let store = self.store();
        match store.list() {
            Ok(entries) if entries.is_empty() => Ok(CallToolResult::success(vec![Content::text(
                format!("No notes found in {}", store.root().display()),
            )])),
            Ok(entries) => {
                let lines: Vec<String> = entries.iter().map(|e| e.summary()).collect();
                Ok(CallToolResult::success(vec![Content::text(format!(
                    "Notes in {}:\n\n{}",
                    store.root().display(),
                    lines.join("\n")
                ))]))
            }
            Err(e) => Ok(tool_error(e)),
        }
    }

    /// Read a note's raw content by title
    #[tool(description = "Read a note from the notes directory by title.")]
    async fn read_note(
        &self,
        params: Parameters<ReadNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.store().read(&params.0.title) {
            Ok(content) => Ok(CallToolResult::success(vec![Content::text(content)])),
            Err(e) => Ok(tool_error(e)),
        }
    }

    /// Delete a note by title
    #[tool(description = "Delete a note from the notes directory by title.")]
    async fn delete_note(
        &self,
        params: Parameters<DeleteNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let title = params.0.title;
        match self.store().delete(&title) {
            Ok(filename) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Deleted note \"{title}\" ({filename})"
            ))])),
            Err(e) => Ok(tool_error(e)),
        }
    }

    /// Add or replace the tag line at the top of a note
    #[tool(
        description = "Add or update tags on a note. Tags are written as a 'Tags: ...' first line and replace any existing tag line."
    )]
    async fn tag_note(
        &self,
        params: Parameters<TagNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let TagNoteParams { title, tags } = params.0;
        match self.store().tag(&title, &tags) {
            Ok(applied) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Tagged \"{title}\" with: {applied}"
            ))])),
            Err(e) => Ok(tool_error(e)),
        }
    }
}

impl ServerHandler for NotesService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Dev Notes MCP Server. Saves, lists, reads, deletes, and tags markdown notes in a single notes directory, keyed by slugified title.".to_string(),
            ),
            ..Default::default()
        }
    }
}

/// Run the MCP server over stdio until the client disconnects.
pub async fn run_mcp_server(notes_dir: PathBuf) -> Result<()> {
    use tokio::io::{stdin, stdout};

    // stdout carries the protocol; diagnostics go to stderr only
    eprintln!("dev-notes MCP server starting ({})", notes_dir.display());

    let service = NotesService::new(notes_dir);
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
