pub mod browse;
pub mod clear;
pub mod config;
pub mod search;
pub mod show;
pub mod watched;

use std::time::Duration;

use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use watchwise_config::{Config, PathManager};
use watchwise_core::WatchedStore;
use watchwise_omdb::OmdbClient;

/// Build the API client from the on-disk config (or defaults).
pub(crate) fn load_client() -> Result<OmdbClient> {
    let path_manager = PathManager::default();
    let config = Config::load(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;
    tracing::debug!(config_file = %path_manager.config_file().display(), "Loaded configuration");
    Ok(OmdbClient::with_base_url(
        config.omdb.api_key,
        config.omdb.base_url,
    ))
}

pub(crate) fn open_store() -> Result<WatchedStore> {
    let path_manager = PathManager::default();
    WatchedStore::open(path_manager.watched_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to open watched list: {}", e))
}

pub(crate) fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(msg.to_string());
    pb
}
