use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Demo key shipped with the app; fine for casual use, replace via
/// `watchwise config set` or the OMDB_API_KEY environment variable.
const EMBEDDED_API_KEY: &str = "6744af7c";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_api_key() -> String {
    std::env::var("OMDB_API_KEY").unwrap_or_else(|_| EMBEDDED_API_KEY.to_string())
}

fn default_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb: OmdbConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert!(!config.omdb.api_key.is_empty());
        assert_eq!(config.omdb.base_url, "https://www.omdbapi.com/");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.omdb.api_key = "abc123".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.omdb.api_key, "abc123");
        assert_eq!(loaded.omdb.base_url, config.omdb.base_url);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[omdb]\napi_key = \"mykey\"\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.omdb.api_key, "mykey");
        assert_eq!(loaded.omdb.base_url, "https://www.omdbapi.com/");
    }
}
