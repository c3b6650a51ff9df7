use crate::output::Output;
use crate::render;
use crate::WatchedCommands;
use color_eyre::Result;
use serde_json::json;
use watchwise_core::WatchedSummary;
use watchwise_models::WatchedMovie;

pub async fn run_watched(cmd: WatchedCommands, output: &Output) -> Result<()> {
    match cmd {
        WatchedCommands::List => list(output),
        WatchedCommands::Summary => summary(output),
        WatchedCommands::Rate { imdb_id, rating } => rate(&imdb_id, rating, output).await,
        WatchedCommands::Remove { imdb_id } => remove(&imdb_id, output),
    }
}

fn list(output: &Output) -> Result<()> {
    let store = super::open_store()?;

    if store.is_empty() {
        output.info("No watched movies yet. Try `watchwise browse`.");
        return Ok(());
    }

    if output.is_human() {
        println!("{}", render::watched_table(store.movies()));
        output.info(render::summary_line(&WatchedSummary::of(store.movies())));
    } else {
        output.json(&json!({
            "watched": serde_json::to_value(store.movies()).unwrap_or_default(),
        }));
    }

    Ok(())
}

fn summary(output: &Output) -> Result<()> {
    let store = super::open_store()?;
    let summary = WatchedSummary::of(store.movies());

    if output.is_human() {
        output.info(render::summary_line(&summary));
    } else {
        output.json(&json!({
            "count": summary.count,
            "avg_imdb_rating": summary.avg_imdb_rating,
            "avg_user_rating": summary.avg_user_rating,
            "avg_runtime_minutes": summary.avg_runtime_minutes,
        }));
    }

    Ok(())
}

async fn rate(imdb_id: &str, rating: u8, output: &Output) -> Result<()> {
    let mut store = super::open_store()?;

    if let Some(existing) = store.get(imdb_id) {
        output.warn(format!(
            "{} is already on your watched list (rated {}/10)",
            existing.title, existing.user_rating
        ));
        return Ok(());
    }

    let client = super::load_client()?;
    let pb = output.is_human().then(|| super::spinner("Loading details..."));
    let details = client.details(imdb_id).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let details = match details {
        Ok(details) => details,
        Err(e) => {
            output.error(format!("Could not get movie details: {}", e));
            return Ok(());
        }
    };

    store
        .add(WatchedMovie::from_details(&details, rating))
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save watched list: {}", e))?;
    output.success(format!(
        "Added {} to your watched list ({}/10)",
        details.title, rating
    ));

    Ok(())
}

fn remove(imdb_id: &str, output: &Output) -> Result<()> {
    let mut store = super::open_store()?;

    let removed = store
        .remove(imdb_id)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save watched list: {}", e))?;

    if removed {
        output.success(format!("Removed {} from your watched list", imdb_id));
    } else {
        output.warn(format!("{} is not on your watched list", imdb_id));
    }

    Ok(())
}
