mod commands;
mod core;
#[cfg(feature = "mcp")]
mod mcp;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::paths::NotesPaths;

#[derive(Parser)]
#[command(name = "dev-notes")]
#[command(about = "Markdown note store with an MCP server for AI agents", long_about = None)]
#[command(version)]
struct Cli {
    /// Notes directory (default: ~/dev-notes)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a note, replacing any existing content
    Save {
        title: String,
        #[arg(help = "Markdown content; use - to read from stdin")]
        content: String,
    },
    /// List all notes with last-modified dates
    List {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Print a note's raw content
    Read { title: String },
    /// Delete a note
    Delete { title: String },
    /// Add or replace tags on a note
    Tag {
        title: String,
        #[arg(required = true, help = "Tags to apply (replaces existing tag line)")]
        tags: Vec<String>,
    },
    /// Start MCP server for Claude integration
    #[cfg(feature = "mcp")]
    Mcp {
        #[arg(long, help = "Show Claude configuration instructions")]
        install: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dir = match cli.dir {
        Some(dir) => dir,
        None => NotesPaths::default_root()?,
    };

    match cli.command {
        Commands::Save { title, content } => commands::save::run(dir, &title, &content),
        Commands::List { json } => commands::list::run(dir, json),
        Commands::Read { title } => commands::read::run(dir, &title),
        Commands::Delete { title } => commands::delete::run(dir, &title),
        Commands::Tag { title, tags } => commands::tag::run(dir, &title, &tags),

        #[cfg(feature = "mcp")]
        Commands::Mcp { install } => {
            if install {
                print_mcp_install_instructions(&dir);
                Ok(())
            } else {
                run_mcp_server(dir)
            }
        }
    }
}

#[cfg(feature = "mcp")]
fn run_mcp_server(dir: PathBuf) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(mcp::run_mcp_server(dir))
}

#[cfg(feature = "mcp")]
fn print_mcp_install_instructions(dir: &std::path::Path) {
    use colored::Colorize;

    let binary_path = std::env::current_exe()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| "dev-notes".to_string());

    println!("{}", "MCP Server Installation Guide".bold().cyan());
    println!();
    println!("Add the following to your Claude configuration:");
    println!();
    println!(
        "{}",
        "For Claude Desktop (~/.config/claude/claude_desktop_config.json):".dimmed()
    );
    println!(
        r#"{{
  "mcpServers": {{
    "dev-notes": {{
      "command": "{}",
      "args": ["--dir", "{}", "mcp"]
    }}
  }}
}}"#,
        binary_path,
        dir.display()
    );
    println!();
    println!("{}", "For Claude Code (~/.claude/settings.json):".dimmed());
    println!(
        r#"{{
  "mcpServers": {{
    "dev-notes": {{
      "command": "{}",
      "args": ["--dir", "{}", "mcp"]
    }}
  }}
}}"#,
        binary_path,
        dir.display()
    );
    println!();
    println!("{}", "Available tools:".bold());
    println!("  • {} - Save or overwrite a markdown note", "save_note".green());
    println!("  • {} - List notes with modified dates", "list_notes".green());
    println!("  • {} - Read a note by title", "read_note".green());
    println!("  • {} - Delete a note by title", "delete_note".green());
    println!("  • {} - Add or replace a note's tag line", "tag_note".green());
}
