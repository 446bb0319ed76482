use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use rosebinge_config::{Config, PathManager};
use rosebinge_core::MovieGateway;
use rosebinge_omdb::OmdbClient;

mod commands;
mod logging;
mod output;
mod store;

#[derive(Parser)]
#[command(name = "rosebinge")]
#[command(about = "Search, browse, and bookmark movies via OMDb")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search movies by title
    Search {
        query: String,

        /// Result page (10 results per page)
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show full detail for one movie by IMDb id
    Movie { id: String },
    /// Show the curated featured set
    Featured,
    /// Show the trending row
    Trending,
    /// Filter the featured set by genre name
    Genre { name: String },
    /// Manage the local watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: WatchlistCommands,
    },
    /// Show recent search queries
    Recent,
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// Look up a movie and add it to the watchlist
    Add { id: String },
    /// Remove a movie from the watchlist by id
    Remove { id: String },
    /// List the watchlist
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    let paths = PathManager::new()?;
    let config = Config::load(&paths.config_file())?;
    let store = store::Store::new(&paths)?;

    // Purely local commands work without a configured API key.
    match &cli.command {
        Commands::Watchlist {
            cmd: WatchlistCommands::Remove { id },
        } => return commands::watchlist_remove(&store, id),
        Commands::Watchlist {
            cmd: WatchlistCommands::List,
        } => return commands::watchlist_list(&store),
        Commands::Recent => return commands::recent(&store),
        _ => {}
    }

    if !config.has_api_key() {
        bail!(
            "no OMDb API key configured; set ROSEBINGE_OMDB_API_KEY or add it to {}",
            paths.config_file().display()
        );
    }

    let client = OmdbClient::new(&config.omdb.api_key).with_base_url(&config.omdb.base_url);
    let gateway = MovieGateway::new(client);

    match cli.command {
        Commands::Search { query, page } => commands::search(&gateway, &store, &query, page).await,
        Commands::Movie { id } => commands::movie(&gateway, &id).await,
        Commands::Featured => commands::featured(&gateway).await,
        Commands::Trending => commands::trending(&gateway).await,
        Commands::Genre { name } => commands::genre(&gateway, &name).await,
        Commands::Watchlist {
            cmd: WatchlistCommands::Add { id },
        } => commands::watchlist_add(&gateway, &store, &id).await,
        Commands::Watchlist { .. } | Commands::Recent => unreachable!("handled above"),
    }
}
