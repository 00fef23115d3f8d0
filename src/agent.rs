//! Agent-side pipeline: one session, three tool calls in a fixed order.

use rmcp::ServiceExt;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, ClientCapabilities, ClientInfo, Implementation,
    RawContent,
};
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::SseClientTransport;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::error::AgentError;

/// A connected, initialized session against the tool server.
#[derive(Debug)]
pub struct Agent {
    session: RunningService<RoleClient, ClientInfo>,
}

impl Agent {
    /// Opens the SSE channel and completes the initialize handshake.
    pub async fn connect(url: &str) -> Result<Self, AgentError> {
        let transport =
            SseClientTransport::start(url.to_owned())
                .await
                .map_err(|err| AgentError::Connection {
                    url: url.to_owned(),
                    detail: err.to_string(),
                })?;

        let client_info = ClientInfo {
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: "condense-agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
        };

        let session = client_info
            .serve(transport)
            .await
            .map_err(|err| AgentError::Handshake {
                detail: err.to_string(),
            })?;

        if let Some(peer_info) = session.peer_info() {
            info!(
                server = %peer_info.server_info.name,
                version = %peer_info.server_info.version,
                "session initialized"
            );
        }

        Ok(Self { session })
    }

    /// Runs the fixed pipeline: read the input file, summarize its content,
    /// write the summary. Returns the server's confirmation message.
    ///
    /// Strictly sequential; each step's result is validated before the next
    /// call is issued, and the first failure aborts the run.
    pub async fn run(&self, input_path: &str, output_path: &str) -> Result<String, AgentError> {
        info!(path = %input_path, "reading input file");
        let content = self
            .call_text_tool("read_file", json!({ "path": input_path }))
            .await?;

        info!(bytes = content.len(), "file read, summarizing content");
        let summary = self
            .call_text_tool("summarize_content", json!({ "content": content }))
            .await?;

        info!(bytes = summary.len(), path = %output_path, "content summarized, writing summary");
        let confirmation = self
            .call_text_tool(
                "write_summary",
                json!({ "path": output_path, "summary": summary }),
            )
            .await?;

        Ok(confirmation)
    }

    /// Invokes one tool and extracts the single text item its result must
    /// carry.
    pub async fn call_text_tool(&self, tool: &str, arguments: Value) -> Result<String, AgentError> {
        let arguments = arguments.as_object().cloned();
        let result = self
            .session
            .call_tool(CallToolRequestParam {
                name: tool.to_owned().into(),
                arguments,
            })
            .await
            .map_err(|err| AgentError::Remote {
                tool: tool.to_owned(),
                detail: err.to_string(),
            })?;

        if result.is_error.unwrap_or(false) {
            let detail = match result.content.first().map(|item| &item.raw) {
                Some(RawContent::Text(text)) => text.text.clone(),
                _ => "unspecified tool error".to_owned(),
            };
            return Err(AgentError::Remote {
                tool: tool.to_owned(),
                detail,
            });
        }

        extract_text(tool, &result)
    }

    /// Tears the session down. Shutdown failures are logged, not propagated;
    /// by this point the pipeline outcome is already decided.
    pub async fn disconnect(self) {
        if let Err(err) = self.session.cancel().await {
            warn!(error = %err, "session shutdown was not clean");
        }
    }
}

/// The server contract is one leading text item per result; anything else is
/// a shape error, checked before the text is used.
fn extract_text(tool: &str, result: &CallToolResult) -> Result<String, AgentError> {
    match result.content.first() {
        Some(item) => match &item.raw {
            RawContent::Text(text) => Ok(text.text.clone()),
            other => Err(AgentError::Shape {
                tool: tool.to_owned(),
                detail: format!("first content item is {}, expected text", content_kind(other)),
            }),
        },
        None => Err(AgentError::Shape {
            tool: tool.to_owned(),
            detail: "result content is empty".to_owned(),
        }),
    }
}

fn content_kind(content: &RawContent) -> &'static str {
    match content {
        RawContent::Text(_) => "text",
        RawContent::Image(_) => "an image",
        RawContent::Audio(_) => "audio",
        RawContent::Resource(_) => "an embedded resource",
        RawContent::ResourceLink(_) => "a resource link",
    }
}
