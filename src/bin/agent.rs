//! Agent entry point: drives one summarization session end-to-end.
//!
//! Connects to the tool server's SSE endpoint, runs the pipeline
//! read → summarize → write, prints the server's confirmation on stdout and
//! exits 0; on any failure prints one diagnostic on stderr and exits 1.

use clap::Parser;
use tracing::info;

use condense::agent::Agent;
use condense::config;
use condense::error::AgentError;

#[derive(Debug, Parser)]
#[command(name = "condense-agent", about = "Summarize a file through the condense tool server")]
struct Args {
    /// SSE endpoint of the tool server
    #[arg(long, default_value = config::DEFAULT_SSE_URL)]
    url: String,

    /// Input file read by the server
    #[arg(long, default_value = config::DEFAULT_INPUT_PATH)]
    input: String,

    /// Output file the server writes the summary to
    #[arg(long, default_value = config::DEFAULT_OUTPUT_PATH)]
    output: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Progress goes to stderr via tracing; stdout carries only the outcome.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args).await {
        Ok(confirmation) => {
            println!("Server says: {confirmation}");
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<String, AgentError> {
    info!(url = %args.url, "connecting to tool server");
    let agent = Agent::connect(&args.url).await?;

    let outcome = agent.run(&args.input, &args.output).await;
    agent.disconnect().await;
    outcome
}
