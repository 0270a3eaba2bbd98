// config.rs
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5004";
pub const DEFAULT_MESSAGING_DOMAIN: &str = "wa.me";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid messaging domain `{0}`")]
    InvalidMessagingDomain(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Command line, with every flag falling back to an environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "listing_site")]
#[command(about = "Server-rendered property catalog backed by the listings API")]
pub struct Cli {
    /// Address the HTTP server binds to
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Base URL of the listings API
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Upstream request timeout, in seconds
    #[arg(long, env = "API_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Maximum number of worker threads serving requests
    #[arg(long, env = "SERVER_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Host of the messaging service contact links point at
    #[arg(long, env = "MESSAGING_DOMAIN", default_value = DEFAULT_MESSAGING_DOMAIN)]
    pub messaging_domain: String,
}

/// Where and how the listings API is reached.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path"));
        }

        Ok(Self {
            base_url: url,
            timeout,
        })
    }
}

/// Settings the page renderers need.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub messaging_domain: String,
    pub carousel_period: Duration,
    pub gallery_page_size: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            messaging_domain: DEFAULT_MESSAGING_DOMAIN.to_string(),
            carousel_period: Duration::from_secs(5),
            gallery_page_size: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen: SocketAddr,
    pub workers: usize,
    pub api: ApiConfig,
    pub site: SiteConfig,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let api = ApiConfig::new(
            &cli.api_base_url,
            Duration::from_secs(cli.request_timeout_secs),
        )?;

        let domain = cli.messaging_domain.trim().trim_end_matches('/').to_string();
        if domain.is_empty() || domain.contains(['/', '?', '#', ' ']) {
            return Err(ConfigError::InvalidMessagingDomain(cli.messaging_domain));
        }

        Ok(Self {
            listen: cli.listen,
            workers: cli.workers.max(1),
            api,
            site: SiteConfig {
                messaging_domain: domain,
                ..SiteConfig::default()
            },
        })
    }
}
