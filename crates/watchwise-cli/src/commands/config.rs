use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;
use watchwise_config::{Config, PathManager};

pub async fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(output),
        ConfigCommands::Set { api_key, base_url } => set_config(api_key, base_url, output),
    }
}

fn mask_key(key: &str) -> String {
    if key.len() <= 4 {
        "*".repeat(key.len())
    } else {
        format!("{}{}", "*".repeat(key.len() - 4), &key[key.len() - 4..])
    }
}

fn show_config(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let config = Config::load(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    if output.is_human() {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        table.add_row(vec![
            Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
            Cell::new(config_file.display().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Watched File").add_attribute(comfy_table::Attribute::Bold),
            Cell::new(path_manager.watched_file().display().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("OMDb API Key").add_attribute(comfy_table::Attribute::Bold),
            Cell::new(mask_key(&config.omdb.api_key)),
        ]);
        table.add_row(vec![
            Cell::new("OMDb Base URL").add_attribute(comfy_table::Attribute::Bold),
            Cell::new(&config.omdb.base_url),
        ]);
        println!("{}", table);
    } else {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "watched_file": path_manager.watched_file().display().to_string(),
            "omdb": {
                "api_key": mask_key(&config.omdb.api_key),
                "base_url": config.omdb.base_url,
            }
        }));
    }

    Ok(())
}

fn set_config(api_key: Option<String>, base_url: Option<String>, output: &Output) -> Result<()> {
    if api_key.is_none() && base_url.is_none() {
        output.warn("Nothing to set. Use --api-key and/or --base-url");
        return Ok(());
    }

    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let mut config = Config::load(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    if let Some(api_key) = api_key {
        config.omdb.api_key = api_key;
        output.success("Updated OMDb API key");
    }
    if let Some(base_url) = base_url {
        config.omdb.base_url = base_url;
        output.success("Updated OMDb base URL");
    }

    config
        .save(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config: {}", e))?;
    output.info(format!("Saved {}", config_file.display()));

    Ok(())
}
