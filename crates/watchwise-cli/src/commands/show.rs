use crate::output::Output;
use crate::render;
use color_eyre::Result;

pub async fn run_show(imdb_id: &str, output: &Output) -> Result<()> {
    let client = super::load_client()?;

    let pb = output.is_human().then(|| super::spinner("Loading details..."));
    let details = client.details(imdb_id).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match details {
        Ok(details) => {
            if output.is_human() {
                render::print_details(&details);

                let store = super::open_store()?;
                if let Some(existing) = store.get(&details.imdb_id) {
                    output.info(format!("You rated this movie {}/10", existing.user_rating));
                }
            } else {
                output.json(&serde_json::to_value(&details).unwrap_or_default());
            }
        }
        Err(e) => output.error(format!("Could not get movie details: {}", e)),
    }

    Ok(())
}
