//! Application configuration management.
//!
//! This module handles loading and saving the client configuration, which
//! includes the backend API root and the last used username.
//!
//! Configuration is stored at `~/.config/sprintboard/config.json`. The
//! `SPRINTBOARD_API_ROOT` environment variable (also honored from a `.env`
//! file) overrides the configured API root.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/storage directory paths
const APP_NAME: &str = "sprintboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured API root
const API_ROOT_ENV: &str = "SPRINTBOARD_API_ROOT";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_root: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the backend API root, preferring the environment over the
    /// config file.
    pub fn api_root(&self) -> Option<String> {
        std::env::var(API_ROOT_ENV).ok().or_else(|| self.api_root.clone())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory where the session store persists its state.
    pub fn session_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            api_root: Some("http://localhost:3000".to_string()),
            last_username: Some("somsri".to_string()),
        };
        let json = serde_json::to_string(&config).expect("serialize config");
        let back: Config = serde_json::from_str(&json).expect("parse config");
        assert_eq!(back.api_root.as_deref(), Some("http://localhost:3000"));
        assert_eq!(back.last_username.as_deref(), Some("somsri"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let config: Config = serde_json::from_str("{}").expect("parse empty config");
        assert!(config.api_root.is_none());
        assert!(config.last_username.is_none());
    }
}
