use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use watchwise_core::WatchedSummary;
use watchwise_models::{MovieDetails, MovieSummary, WatchedMovie};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

pub fn results_table(movies: &[MovieSummary]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Title"),
        header_cell("Year"),
        header_cell("IMDb ID"),
    ]);
    for (i, movie) in movies.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&movie.title),
            Cell::new(&movie.year),
            Cell::new(&movie.imdb_id),
        ]);
    }
    table
}

pub fn watched_table(movies: &[WatchedMovie]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Title"),
        header_cell("Year"),
        header_cell("IMDb ⭐"),
        header_cell("Yours 🌟"),
        header_cell("Runtime"),
        header_cell("IMDb ID"),
    ]);
    for movie in movies {
        table.add_row(vec![
            Cell::new(&movie.title),
            Cell::new(&movie.year),
            Cell::new(or_na(movie.imdb_rating.map(|r| format!("{:.1}", r)))),
            Cell::new(format!("{}/10", movie.user_rating)),
            Cell::new(or_na(movie.runtime_minutes.map(|m| format!("{} min", m)))),
            Cell::new(&movie.imdb_id),
        ]);
    }
    table
}

pub fn print_details(details: &MovieDetails) {
    println!();
    println!("{} ({})", details.title.bold(), details.year);

    let mut meta = Vec::new();
    if let Some(released) = &details.released {
        meta.push(released.clone());
    }
    if let Some(runtime) = details.runtime_minutes {
        meta.push(format!("{} min", runtime));
    }
    if let Some(genre) = &details.genre {
        meta.push(genre.clone());
    }
    if !meta.is_empty() {
        println!("{}", meta.join(" • "));
    }

    if let Some(rating) = details.imdb_rating {
        println!("⭐ {:.1} IMDb rating", rating);
    }
    if let Some(plot) = &details.plot {
        println!("\n{}", plot.italic());
    }
    if let Some(actors) = &details.actors {
        println!("Starring: {}", actors);
    }
    if let Some(director) = &details.director {
        println!("Directed by {}", director);
    }
    println!();
}

pub fn summary_line(summary: &WatchedSummary) -> String {
    format!(
        "#️⃣ {} movies  ⭐ {:.2}  🌟 {:.2}  ⏳ {:.0} min",
        summary.count,
        summary.avg_imdb_rating,
        summary.avg_user_rating,
        summary.avg_runtime_minutes
    )
}
