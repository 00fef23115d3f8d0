//! Environment and command-line configuration.

/// Default listen address of the tool server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// Default SSE endpoint the agent connects to.
pub const DEFAULT_SSE_URL: &str = "http://localhost:8000/sse";
/// Default input file read by the pipeline.
pub const DEFAULT_INPUT_PATH: &str = "input.txt";
/// Default output file the summary is written to.
pub const DEFAULT_OUTPUT_PATH: &str = "summary.txt";

/// Configuration for the summarization provider.
///
/// Constructed once at server startup and handed to the tool service, so
/// nothing reads the process environment at call time.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key. A missing key is tolerated here and surfaces as a provider
    /// error on the first summarization call.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Model used for summarization.
    pub model: String,
}

impl ProviderConfig {
    /// Reads the provider settings from the environment (with `.env`
    /// support).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: std::env::var("CONDENSE_MODEL")
                .unwrap_or_else(|_| "gpt-4.1-nano".to_string()),
        }
    }
}
