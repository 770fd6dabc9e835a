use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Forum base URL, e.g. https://forum.example.com
    #[arg(long)]
    pub url: String,

    /// Search query
    #[arg(long)]
    pub query: String,

    /// Feed title. Defaults to the forum URL
    #[arg(long)]
    pub name: Option<String>,

    /// File to write the feed to. Writes to stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Validated settings for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Forum base URL without a trailing slash. Also used as the feed id.
    pub base_url: String,
    pub query: String,
    pub feed_title: String,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Build the run configuration from parsed arguments.
    #[must_use]
    pub fn from_args(args: Args) -> Self {
        let base_url = normalize_base_url(&args.url);
        let feed_title = args.name.unwrap_or_else(|| base_url.clone());

        Self {
            base_url,
            query: args.query,
            feed_title,
            output: args.output,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL. The
    /// query is sent as given, even when blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            name: "--url".to_string(),
            message: format!("'{}' is not a valid URL: {e}", self.base_url),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                name: "--url".to_string(),
                message: format!("scheme must be http or https, got '{}'", parsed.scheme()),
            });
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
