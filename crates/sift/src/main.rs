//! Sift CLI binary.

use anyhow::Result;
use sift::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the sift CLI.
///
/// Uses tokio's current_thread runtime: processing is strictly sequential,
/// one line at a time, so there is nothing to parallelize.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logging goes to stderr and can be controlled via RUST_LOG,
    // e.g. RUST_LOG=sift=debug,sift_jsonl=trace. Stdout carries only the
    // filtered lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sift=info,sift_jsonl=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse_args();
    cli.execute().await
}
