//! MCP server module
//!
//! Exposes the IFM tools over the Model Context Protocol.

pub mod server;

pub use server::IfmService;
