use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use discourse_search_atom::config::{Args, Config};
use discourse_search_atom::{discourse, feed, output};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_tracing() {
        eprintln!("{e:#}");
    }

    if let Err(e) = run(args).await {
        // Printed directly so a restrictive RUST_LOG cannot hide it
        let _ = report_fatal(&mut std::io::stderr(), &e);
        std::process::exit(1);
    }
}

fn report_fatal(out: &mut impl Write, err: &anyhow::Error) -> std::io::Result<()> {
    writeln!(out, "Fatal error: {err:#}")
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args);
    config.validate().context("Invalid arguments")?;

    info!(url = %config.base_url, query = %config.query, "Starting search");

    let client = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let records = discourse::fetch_records(&client, &config.base_url, &config.query)
        .await
        .context("Failed to fetch search results")?;

    let atom = feed::render(&records, &config.base_url, &config.feed_title)
        .context("Failed to render feed")?;

    output::write_feed(config.output.as_deref(), &atom).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,discourse_search_atom=info"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    // stdout carries the feed, so logs go to stderr
    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
