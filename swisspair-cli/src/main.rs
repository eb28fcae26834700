mod config;
mod output;
mod store;

use clap::Parser;
use std::path::{Path, PathBuf};
use swisspair_core::{ranked_players, EngineConfig, PairingEngine, PairingError, MAX_REPAIR_ATTEMPTS};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SwisspairConfig;
use crate::store::TournamentStore;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "swisspair", version, about = "Run a Swiss-system tournament: register players, report matches, pair rounds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: ~/.config/swisspair/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tournament state file (default: ~/.local/share/swisspair/tournament.json)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Log debug detail to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Register a new player; prints the assigned id
    Register {
        /// Player's full name (need not be unique)
        #[arg(long)]
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        #[arg(long)]
        winner: i64,
        /// Id of the player who lost
        #[arg(long)]
        loser: i64,
    },
    /// Show players ranked by wins, then opponent strength
    Standings {
        /// Output JSON instead of table
        #[arg(long)]
        json: bool,
    },
    /// Pair players for the next round, avoiding rematches
    Pair(PairArgs),
    /// Print the number of registered players
    Count,
    /// Remove all match records
    DeleteMatches,
    /// Remove all players (and their matches)
    DeletePlayers,
    /// Create a default config file at ~/.config/swisspair/config.toml
    Init,
}

#[derive(clap::Args)]
struct PairArgs {
    /// Output JSON instead of table
    #[arg(long)]
    json: bool,

    /// Repair swaps allowed before giving up (default: 100)
    #[arg(long)]
    max_attempts: Option<usize>,
}

fn init_tracing(verbose: bool, cfg: &SwisspairConfig) {
    let default_directive = if verbose {
        "debug".to_string()
    } else {
        cfg.log.clone().unwrap_or_else(|| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Load config file, merge with CLI args (CLI wins)
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    init_tracing(cli.verbose, &cfg);
    debug!(config = %config_path.display(), "Loaded config");

    let state_path = cli
        .state
        .clone()
        .or_else(|| cfg.state_file.as_deref().map(config::expand_home))
        .unwrap_or_else(config::default_state_path);

    match cli.command {
        Commands::Init => {
            config::create_default_config(&config_path);
            println!("Created config at {}", config_path.display());
            println!("Edit it to set your state file, repair budget, etc.");
        }
        Commands::Register { name } => {
            let id = update_store(&state_path, |store| Ok(store.register_player(&name)));
            println!("{id}");
        }
        Commands::Report { winner, loser } => {
            update_store(&state_path, |store| store.report_match(winner, loser));
        }
        Commands::Standings { json } => {
            let store = load_store(&state_path);
            let records = store.standings().unwrap_or_else(|e| bail(e));
            if json {
                let rendered = output::standings_json(&records).unwrap_or_else(|e| bail(e));
                println!("{rendered}");
            } else {
                print!("{}", output::standings_table(&records));
            }
        }
        Commands::Pair(args) => run_pair(&state_path, &args, &cfg),
        Commands::Count => {
            println!("{}", load_store(&state_path).count_players());
        }
        Commands::DeleteMatches => {
            let removed = update_store(&state_path, |store| Ok(store.delete_matches()));
            println!("Deleted {removed} matches");
        }
        Commands::DeletePlayers => {
            let removed = update_store(&state_path, |store| Ok(store.delete_players()));
            println!("Deleted {removed} players");
        }
    }
}

fn load_store(path: &Path) -> TournamentStore {
    TournamentStore::load(path).unwrap_or_else(|e| bail(e))
}

/// Load, apply `change`, and save. Nothing is written if `change` fails.
fn update_store<T>(
    path: &Path,
    change: impl FnOnce(&mut TournamentStore) -> Result<T, store::StoreError>,
) -> T {
    let mut store = load_store(path);
    let value = change(&mut store).unwrap_or_else(|e| bail(e));
    store.save(path).unwrap_or_else(|e| bail(e));
    value
}

fn run_pair(state_path: &Path, args: &PairArgs, cfg: &SwisspairConfig) {
    let store = load_store(state_path);
    let records = store.standings().unwrap_or_else(|e| bail(e));
    let standings = ranked_players(&records);

    let max_attempts = args
        .max_attempts
        .or(cfg.max_attempts)
        .unwrap_or(MAX_REPAIR_ATTEMPTS);
    let engine = PairingEngine::new(EngineConfig { max_attempts });

    let history = store.history();
    info!(
        players = standings.len(),
        prior_pairings = history.len(),
        max_attempts,
        "Generating pairings"
    );

    let report = match engine.generate_pairings_with_report(&standings, &history) {
        Ok(report) => report,
        Err(PairingError::InvalidInput { players }) => bail(format!(
            "Need an even number of players (at least 2) to pair a round, {players} registered"
        )),
        Err(PairingError::RetryExhausted { attempts }) => bail(format!(
            "Could not avoid rematches after {attempts} repair attempts. \
             Try a larger --max-attempts, or pair this round by hand."
        )),
        Err(PairingError::History(never)) => match never {},
    };

    if args.json {
        let rendered = output::pairing_json(&report).unwrap_or_else(|e| bail(e));
        println!("{rendered}");
    } else {
        print!("{}", output::pairing_table(&report));
    }
}
