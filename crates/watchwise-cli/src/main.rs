use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, clear, config, search, show, watched};

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "watchwise")]
#[command(about = "WatchWise - Search movies and keep a rated watched list")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively search, inspect, and rate movies (default)
    #[command(long_about = "Interactive mode: type a query (3+ characters), pick a result to see its details, rate it 1-10 to add it to your watched list. An empty query exits.")]
    Browse,

    /// One-shot title search
    Search {
        /// Search text (fewer than 3 characters returns nothing)
        query: String,
    },

    /// Show full details for one movie
    Show {
        /// IMDb id, e.g. tt0133093
        imdb_id: String,
    },

    /// Manage the watched list
    #[command(long_about = "List, rate, or remove entries in the persisted watched list. Running without a subcommand lists everything with summary stats.")]
    Watched {
        #[command(subcommand)]
        cmd: Option<WatchedCommands>,
    },

    /// View or update configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },

    /// Clear stored data
    #[command(long_about = "Delete stored data. Use --watched to clear the watched list, --config to remove the configuration file, or --all for both.")]
    Clear {
        /// Clear both the watched list and the configuration
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,

        /// Clear the watched list
        #[arg(long, action = ArgAction::SetTrue)]
        watched: bool,

        /// Clear the configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        config: bool,
    },
}

#[derive(Subcommand)]
enum WatchedCommands {
    /// List watched movies with summary stats
    List,

    /// Show only the summary stats
    Summary,

    /// Look up a movie by IMDb id, rate it, and add it to the list
    Rate {
        /// IMDb id, e.g. tt0133093
        imdb_id: String,

        /// Star rating
        #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
        rating: u8,
    },

    /// Remove a movie from the list
    Remove {
        /// IMDb id, e.g. tt0133093
        imdb_id: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Update configuration values
    Set {
        /// OMDb API key
        #[arg(long)]
        api_key: Option<String>,

        /// OMDb base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => browse::run_browse(&output).await,
        Commands::Search { query } => search::run_search(&query, &output).await,
        Commands::Show { imdb_id } => show::run_show(&imdb_id, &output).await,
        Commands::Watched { cmd } => {
            watched::run_watched(cmd.unwrap_or(WatchedCommands::List), &output).await
        }
        Commands::Config { cmd } => {
            config::run_config(cmd.unwrap_or(ConfigCommands::Show), &output).await
        }
        Commands::Clear {
            all,
            watched,
            config,
        } => clear::run_clear(all, watched, config, &output).await,
    }
}
