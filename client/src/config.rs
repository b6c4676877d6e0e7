//! Application configuration from environment variables

use std::path::PathBuf;

/// Client configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Banter API server
    pub api_url: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g. "client=debug,info")
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8080".to_string(),
            log_dir: PathBuf::from("logs"),
            log_filter: "client=info,warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `BANTER_API_URL`: base URL of the API server
    /// - `BANTER_LOG_DIR`: directory for rotated log files
    /// - `RUST_LOG`: log filter (also honored directly by the subscriber)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: std::env::var("BANTER_API_URL").unwrap_or(defaults.api_url),
            log_dir: std::env::var("BANTER_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_filter: std::env::var("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let config = AppConfig::default();

        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_filter, "client=info,warn");
    }
}
