//! GitHub Repo Health Analyzer - commit activity and bus-factor API
//!
//! # Usage
//! ```bash
//! repo-health                          # Serve on 127.0.0.1:8000
//! repo-health --port 9000              # Custom port
//! GITHUB_TOKEN=ghp_... repo-health     # Authenticated GitHub requests
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repo_health::GithubClient;

/// Analyze the health of a public GitHub repository over HTTP
#[derive(Parser)]
#[command(name = "repo-health")]
#[command(about = "GitHub repository health analyzer API", long_about = None)]
struct Cli {
    /// Address to bind the server on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// GitHub API token for elevated rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    api_token: Option<SecretString>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    api_url: String,

    /// Timeout in seconds for each outbound GitHub request
    #[arg(long, default_value = "15")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = GithubClient::new(
        cli.api_url.trim_end_matches('/'),
        cli.api_token.as_ref(),
        Duration::from_secs(cli.timeout_secs),
    )?;

    if client.token_configured() {
        tracing::info!("GitHub token configured, using authenticated rate limits");
    } else {
        tracing::info!("no GitHub token configured, using anonymous rate limits");
    }

    let app = repo_health::app(Arc::new(client));

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!("serving on http://{}", addr);

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        tracing::info!("shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
