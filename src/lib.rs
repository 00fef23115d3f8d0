//! # Condense
//!
//! A minimal remote tool-calling demo built on the MCP Rust SDK:
//! - `condense-server` exposes three tools (`read_file`, `summarize_content`,
//!   `write_summary`) over an SSE transport.
//! - `condense-agent` connects to the server and runs the fixed pipeline
//!   read → summarize → write, then reports the outcome.

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod service;
