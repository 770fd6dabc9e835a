//! Feed output: standard output or a file.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Write the rendered feed to `destination`, or to stdout when it is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be written or stdout is closed.
pub async fn write_feed(destination: Option<&Path>, feed: &[u8]) -> Result<()> {
    match destination {
        Some(path) => {
            tokio::fs::write(path, feed)
                .await
                .with_context(|| format!("Failed to write feed to {}", path.display()))?;
            info!(path = %path.display(), bytes = feed.len(), "Feed written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(feed)
                .await
                .context("Failed to write feed to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
