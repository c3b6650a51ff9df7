use crate::output::Output;
use crate::render;
use color_eyre::Result;
use serde_json::json;
use watchwise_core::{SearchSession, SearchState, MIN_QUERY_LEN};

pub async fn run_search(query: &str, output: &Output) -> Result<()> {
    let client = super::load_client()?;
    let mut session = SearchSession::new(client);

    let ticket = session.submit(query);
    if ticket.is_cleared() {
        output.warn(format!(
            "A search needs at least {} characters",
            MIN_QUERY_LEN
        ));
        return Ok(());
    }

    let pb = output.is_human().then(|| super::spinner("Searching..."));
    let state = ticket.resolve().await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match state {
        SearchState::Loaded(movies) => {
            if output.is_human() {
                println!("{}", render::results_table(&movies));
                output.info(format!("Found {} results", movies.len()));
            } else {
                output.json(&json!({
                    "query": query,
                    "results": serde_json::to_value(&movies).unwrap_or_default(),
                }));
            }
        }
        SearchState::NotFound => output.error("Movie not found"),
        SearchState::Failed(msg) => output.error(msg),
        // A single submit can be neither cleared (handled above) nor superseded
        SearchState::Cleared | SearchState::Superseded => {}
    }

    Ok(())
}
