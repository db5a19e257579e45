mod config;
mod offline;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use clap::Parser;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, TicTacToeSession};
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(
    name = "tictactoe_client",
    about = "Tic-tac-toe in the terminal, against a friend or the computer"
)]
struct Args {
    /// Opponent: `ai` or `pvp`. Overrides the config file.
    #[arg(long)]
    mode: Option<GameMode>,

    /// Computer strength: easy, medium or hard. Overrides the config file.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Fixed RNG seed, for replaying a session.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(&args.config).get_or_create_config()?;
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    match config.log_file {
        Some(ref log_file) => logger::init_file_logger(prefix, Path::new(log_file))?,
        None => logger::init_logger(prefix),
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Client started with config {}, session seed {}",
        args.config.display(),
        rng.seed()
    );

    let mut session = TicTacToeSession::new(config.session_settings(), rng);
    run_tictactoe_game(&config, &mut session).await?;

    log!("Client shut down");
    Ok(())
}
