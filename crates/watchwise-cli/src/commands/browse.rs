use crate::output::Output;
use crate::render;
use color_eyre::Result;
use dialoguer::{Input, Select};
use watchwise_core::{SearchSession, SearchState, WatchedSummary, MIN_QUERY_LEN};
use watchwise_models::WatchedMovie;

/// Interactive loop: query → result list → detail view → rate & add,
/// mirroring the list/detail toggle of the original UI.
pub async fn run_browse(output: &Output) -> Result<()> {
    if !output.is_human() {
        return Err(color_eyre::eyre::eyre!(
            "browse is interactive; use --output human (try `watchwise search` for JSON)"
        ));
    }

    let client = super::load_client()?;
    let mut store = super::open_store()?;
    let mut session = SearchSession::new(client);

    output.info("Search movies (empty query quits)");
    loop {
        let query: String = Input::new()
            .with_prompt("Search")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;
        if query.trim().is_empty() {
            break;
        }

        let ticket = session.submit(&query);
        if ticket.is_cleared() {
            output.warn(format!(
                "Keep typing - a search needs at least {} characters",
                MIN_QUERY_LEN
            ));
            continue;
        }

        let pb = super::spinner("Searching...");
        let state = ticket.resolve().await;
        pb.finish_and_clear();

        let movies = match state {
            SearchState::Loaded(movies) => movies,
            SearchState::NotFound => {
                output.error("Movie not found");
                continue;
            }
            SearchState::Failed(msg) => {
                output.error(msg);
                continue;
            }
            SearchState::Cleared | SearchState::Superseded => continue,
        };

        output.info(format!("Found {} results", movies.len()));

        let mut items: Vec<String> = movies
            .iter()
            .map(|m| format!("{} ({})", m.title, m.year))
            .collect();
        items.push("← New search".to_string());

        let choice = Select::new()
            .with_prompt("Open")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))?;
        if choice == movies.len() {
            continue;
        }

        let pb = super::spinner("Loading details...");
        let details = session.details(&movies[choice].imdb_id).await;
        pb.finish_and_clear();

        let details = match details {
            Ok(details) => details,
            Err(e) => {
                output.error(format!("Could not get movie details: {}", e));
                continue;
            }
        };

        render::print_details(&details);

        if let Some(existing) = store.get(&details.imdb_id) {
            output.info(format!("You rated this movie {}/10", existing.user_rating));
            continue;
        }

        let rating: String = Input::new()
            .with_prompt("Your rating, 1-10 (empty to skip)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;
        let rating = rating.trim();
        if rating.is_empty() {
            continue;
        }

        match rating.parse::<u8>() {
            Ok(stars) if (1..=10).contains(&stars) => {
                store
                    .add(WatchedMovie::from_details(&details, stars))
                    .map_err(|e| color_eyre::eyre::eyre!("Failed to save watched list: {}", e))?;
                output.success(format!("Added {} to your watched list", details.title));
            }
            _ => output.error("Rating must be a whole number from 1 to 10"),
        }
    }

    if !store.is_empty() {
        output.info(render::summary_line(&WatchedSummary::of(store.movies())));
    }

    Ok(())
}
