use clap::{Parser, Subcommand};
use futures_util::future::join_all;
use pokedex_pipeline::encounters::write_encounters_file;
use pokedex_pipeline::games::{GAMES, GameDefinition, find_game};
use pokedex_pipeline::pokeapi::HttpClient;
use pokedex_pipeline::species::download_species;
use pokedex_pipeline::{Config, PipelineError};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pokedex-pipeline", about = "Builds Pokémon JSON data from PokeAPI")]
struct Cli {
    /// TOML configuration file; the bundled defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `<root>/<game>/encounters.json` for each game.
    Encounters {
        /// Game ids to build. Defaults to every known game.
        games: Vec<String>,

        /// Overrides `output.encounters_root`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Download species fixtures into `<data-root>/pokemon/`.
    Download {
        /// Overrides `output.species_limit`.
        #[arg(long)]
        limit: Option<u32>,

        /// Overrides `output.data_root`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn resolve_games(ids: &[String]) -> Result<Vec<&'static GameDefinition>, PipelineError> {
    if ids.is_empty() {
        return Ok(GAMES.iter().collect());
    }

    ids.iter()
        .map(|id| {
            find_game(id).ok_or_else(|| PipelineError::Config(format!("unknown game: {}", id)))
        })
        .collect()
}

async fn build_encounters(
    client: &HttpClient,
    root: PathBuf,
    ids: &[String],
) -> Result<(), PipelineError> {
    let games = resolve_games(ids)?;

    // Each game owns its own aggregation state, so they can run side by side.
    let results = join_all(games.iter().map(|game| {
        write_encounters_file(
            client,
            &root,
            &game.info,
            game.location_order,
            game.transformers,
        )
    }))
    .await;

    let mut failed = None;
    for (game, result) in games.iter().zip(results) {
        if let Err(e) = result {
            tracing::error!("Failed to build encounters for {}: {}", game.info.id, e);
            failed = Some(e);
        }
    }

    match failed {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn run(cli: Cli) -> Result<(), PipelineError> {
    let config = Config::load(cli.config.as_deref())?;
    let client = HttpClient::new(&config);

    match cli.command {
        Command::Encounters { games, out } => {
            let root = out.unwrap_or_else(|| config.output.encounters_root.clone());
            build_encounters(&client, root, &games).await?;
        }
        Command::Download { limit, out } => {
            let root = out.unwrap_or_else(|| config.output.data_root.clone());
            let limit = limit.unwrap_or(config.output.species_limit);
            let delay = Duration::from_millis(config.pokeapi.request_delay_ms);
            download_species(&client, &root, limit, delay).await?;
        }
    }

    if let Some(stats) = client.cache_stats() {
        tracing::debug!(
            "Response cache: {} hits, {} misses ({:.1}% hit rate)",
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Pipeline failed: {}", e);
        std::process::exit(1);
    }
}
