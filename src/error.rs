//! Error types for the agent pipeline.

use thiserror::Error;

/// Failure modes of one agent session, in the order they can occur.
///
/// Every variant is terminal for the run: the pipeline aborts on the first
/// error and the binary exits non-zero.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The SSE channel to the tool server could not be established.
    #[error("cannot reach tool server at {url}: {detail}")]
    Connection { url: String, detail: String },

    /// The session handshake failed or was rejected by the server.
    #[error("session handshake failed: {detail}")]
    Handshake { detail: String },

    /// The server reported a tool failure (missing file, provider error, ...).
    #[error("tool '{tool}' failed: {detail}")]
    Remote { tool: String, detail: String },

    /// The tool result did not carry the single text item the pipeline
    /// consumes.
    #[error("tool '{tool}' returned an unexpected response shape: {detail}")]
    Shape { tool: String, detail: String },
}
