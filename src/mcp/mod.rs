//! MCP Server for dev notes
//!
//! Exposes the five note tools over stdio for Claude integration.

mod server;

pub use server::run_mcp_server;
