//! telegram-mcp-gateway: a thin MCP bridge in front of the Telegram Bot API.
//!
//! Exposes a single `sent_message` tool over MCP (stdio or streamable HTTP)
//! and forwards each invocation to one pre-configured chat.

pub mod api;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
