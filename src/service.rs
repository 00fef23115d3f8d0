//! The MCP tool service: three stateless file-summarization tools.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::llm::{self, Message};

/// System instruction establishing the summarization persona.
const SUMMARIZER_PERSONA: &str = "You are a helpful assistant that summarizes text.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadFileArgs {
    /// Path of the text file to read
    pub path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SummarizeContentArgs {
    /// Text content to summarize
    pub content: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WriteSummaryArgs {
    /// Destination path for the summary file
    pub path: String,
    /// Summary text, written verbatim
    pub summary: String,
}

/// Tool server backing the summarization pipeline.
///
/// Tools keep no state between calls; the only held data is the injected
/// provider configuration for `summarize_content`.
#[derive(Clone)]
pub struct SummarizerService {
    provider: ProviderConfig,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SummarizerService {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            tool_router: Self::tool_router(),
        }
    }

    /// Reads the full content of a specified text file.
    #[tool]
    async fn read_file(
        &self,
        Parameters(ReadFileArgs { path }): Parameters<ReadFileArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(path = %path, "read_file");
        let content = tokio::fs::read_to_string(&path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ErrorData::resource_not_found(format!("file not found: {path}"), None)
            } else {
                ErrorData::internal_error(format!("failed to read {path}: {err}"), None)
            }
        })?;
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }

    /// Takes text content and returns a concise, model-generated summary.
    #[tool]
    async fn summarize_content(
        &self,
        Parameters(SummarizeContentArgs { content }): Parameters<SummarizeContentArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(bytes = content.len(), "summarize_content");
        let messages = [Message::system(SUMMARIZER_PERSONA), Message::user(content)];
        let response = llm::openai::chat(&self.provider, &messages)
            .await
            .map_err(|err| {
                ErrorData::internal_error(format!("summarization failed: {err}"), None)
            })?;
        Ok(CallToolResult::success(vec![Content::text(
            response.content,
        )]))
    }

    /// Writes the final summary string to a file, creating or truncating it.
    #[tool]
    async fn write_summary(
        &self,
        Parameters(WriteSummaryArgs { path, summary }): Parameters<WriteSummaryArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(path = %path, bytes = summary.len(), "write_summary");
        tokio::fs::write(&path, &summary).await.map_err(|err| {
            ErrorData::internal_error(format!("failed to write {path}: {err}"), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Summary successfully written to {path}"
        ))]))
    }
}

#[tool_handler]
impl ServerHandler for SummarizerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Reads a text file, summarizes it with a language model, and writes the summary to disk."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
