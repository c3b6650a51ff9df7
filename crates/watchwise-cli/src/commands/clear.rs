use crate::output::Output;
use color_eyre::Result;
use std::fs;
use watchwise_config::PathManager;

pub async fn run_clear(all: bool, watched: bool, config: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();

    if all {
        clear_watched(&path_manager, output)?;
        clear_config(&path_manager, output)?;
        output.success("All stored data cleared");
        return Ok(());
    }

    let mut cleared_anything = false;

    if watched {
        clear_watched(&path_manager, output)?;
        cleared_anything = true;
    }

    if config {
        clear_config(&path_manager, output)?;
        cleared_anything = true;
    }

    if !cleared_anything {
        output.warn("No clear option specified. Use --watched, --config, or --all");
        output.println("\nExample: watchwise clear --watched");
    }

    Ok(())
}

fn clear_watched(path_manager: &PathManager, output: &Output) -> Result<()> {
    let watched_file = path_manager.watched_file();

    if watched_file.exists() {
        fs::remove_file(&watched_file).map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to remove watched list at {}: {}",
                watched_file.display(),
                e
            )
        })?;
        output.success(format!("Cleared watched list: {}", watched_file.display()));
    } else {
        output.info("No watched list found to clear");
    }

    Ok(())
}

fn clear_config(path_manager: &PathManager, output: &Output) -> Result<()> {
    let config_file = path_manager.config_file();

    if config_file.exists() {
        fs::remove_file(&config_file).map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to remove config file at {}: {}",
                config_file.display(),
                e
            )
        })?;
        output.success(format!("Cleared configuration: {}", config_file.display()));
    } else {
        output.info("No configuration file found to clear");
    }

    Ok(())
}
