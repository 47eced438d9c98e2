//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default backend address
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Environment variable overriding the backend address
pub const API_URL_ENV: &str = "BUSDESK_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeskConfig {
    /// Base URL the `/api/...` paths are joined to
    pub api_base_url: Option<String>,
    /// Write logs to a file in the data directory (default on)
    pub log_to_file: Option<bool>,
}

impl DeskConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "busdesk", "busdesk")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("busdesk.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: DeskConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolve the backend address: environment, then file, then default
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn log_to_file(&self) -> bool {
        self.log_to_file.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.log_to_file.is_none());
        assert!(config.log_to_file());
    }

    #[test]
    fn test_serialization() {
        let config = DeskConfig {
            api_base_url: Some("https://backoffice.example.com".to_string()),
            log_to_file: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DeskConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url,
            Some("https://backoffice.example.com".to_string())
        );
        assert_eq!(parsed.log_to_file, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: DeskConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_base_url": "http://bus.local", "theme": "dark"}"#;
        let parsed: DeskConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_base_url, Some("http://bus.local".to_string()));
    }

    #[test]
    fn test_resolve_prefers_env() {
        let config = DeskConfig {
            api_base_url: Some("http://from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_base_url(Some("http://from-env".to_string())),
            "http://from-env"
        );
    }

    #[test]
    fn test_resolve_falls_back_to_file_then_default() {
        let config = DeskConfig {
            api_base_url: Some("http://from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_base_url(Some("  ".to_string())),
            "http://from-file"
        );
        assert_eq!(
            DeskConfig::default().resolve_api_base_url(None),
            DEFAULT_API_URL
        );
    }

    #[test]
    fn test_load_returns_ok() {
        // Default config when no file exists; parsed config otherwise
        assert!(DeskConfig::load().is_ok());
    }
}
