//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Snapshot file for persistent storage; in-memory only when unset
    pub messages_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MESSAGES_FILE` - Path of the JSON snapshot (default: unset)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            messages_file: env::var("MESSAGES_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            messages_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert!(config.messages_file.is_none());
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env vars so parallel tests cannot race
        env::remove_var("SERVER_PORT");
        env::remove_var("MESSAGES_FILE");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert!(config.messages_file.is_none());

        env::set_var("SERVER_PORT", "8081");
        env::set_var("MESSAGES_FILE", "/tmp/board.json");
        let config = Config::from_env();
        assert_eq!(config.server_port, 8081);
        assert_eq!(config.messages_file, Some(PathBuf::from("/tmp/board.json")));

        env::set_var("SERVER_PORT", "not-a-port");
        env::set_var("MESSAGES_FILE", "  ");
        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert!(config.messages_file.is_none());

        env::remove_var("SERVER_PORT");
        env::remove_var("MESSAGES_FILE");
    }
}
