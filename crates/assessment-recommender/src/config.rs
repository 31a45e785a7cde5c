use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_CATALOG_PATH: &str = "individual_test_solutions.json";
const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";

/// How the recommender is exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// JSON API plus the interactive form page.
    Http,
    /// MCP tools over stdio.
    Mcp,
}

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the crawler's JSON snapshot.
    pub catalog_path: PathBuf,
    /// Listen address for the HTTP transport.
    pub http_addr: SocketAddr,
    pub transport: Transport,
}

impl Config {
    /// Optional:
    /// - `ASSESSMENT_CATALOG_PATH` (default: "individual_test_solutions.json")
    /// - `RECOMMENDER_HTTP_ADDR` (default: "127.0.0.1:8000")
    /// - `RECOMMENDER_TRANSPORT`: "http" (default) or "mcp"
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let catalog_path = lookup("ASSESSMENT_CATALOG_PATH")
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        let raw_addr =
            lookup("RECOMMENDER_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr.parse().map_err(|e| {
            AppError::Config(format!("RECOMMENDER_HTTP_ADDR is not a socket address ({raw_addr}): {e}"))
        })?;

        let transport = match lookup("RECOMMENDER_TRANSPORT").as_deref().map(str::trim) {
            None | Some("") => Transport::Http,
            Some(t) if t.eq_ignore_ascii_case("http") => Transport::Http,
            Some(t) if t.eq_ignore_ascii_case("mcp") => Transport::Mcp,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "RECOMMENDER_TRANSPORT must be \"http\" or \"mcp\", got \"{other}\""
                )))
            }
        };

        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            http_addr,
            transport,
        })
    }
}
