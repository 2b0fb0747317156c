//! Core protocol types: domain-agnostic JSON-RPC contracts.

pub mod mcp;
