//! Headless bot self-play
//!
//! Plays the bot against itself from the initial position (or a FEN) and logs
//! every move. Stops at the ply limit or as soon as the game is over; a move
//! is never requested in a finished game.

use anyhow::Context;
use chess_engine::{Rules, ShakmatyBoard};
use chessbot::core::{BotConfig, CONFIG_FILENAME};
use chessbot::BotSession;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chessbot", version, about = "Let the chess bot play itself")]
struct Cli {
    /// Bot config file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = CONFIG_FILENAME)]
    config: PathBuf,

    /// Difficulty to play at, overriding the configured default
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<String>,

    /// Maximum number of plies to play
    #[arg(short = 'n', long = "plies", default_value_t = 20)]
    plies: u32,

    /// Seed for the random branch, for reproducible games
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Start from this position instead of the initial one
    #[arg(short = 'f', long = "fen")]
    fen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = BotConfig::load_or_default(&cli.config);
    let mut session = BotSession::new(config).context("invalid bot configuration")?;
    if let Some(seed) = cli.seed {
        session = session.with_seed(seed);
    }
    if let Some(name) = &cli.difficulty {
        session.set_difficulty(name)?;
    }

    let mut board = match &cli.fen {
        Some(fen) => ShakmatyBoard::from_fen(fen)?,
        None => ShakmatyBoard::new(),
    };

    info!(
        "[AI] Self-play at {} for up to {} plies from {}",
        session.difficulty(),
        cli.plies,
        board.fen()
    );

    let mut played = Vec::new();
    for ply in 1..=cli.plies {
        if board.is_game_over() {
            break;
        }

        let reply = session
            .request_move(board, |_| {})
            .map_err(|rejected| rejected.error)?
            .wait()
            .await?;
        board = reply.position;
        let mv = reply.outcome?;

        let mover = board.side_to_move();
        board.apply(&mv)?;
        info!("[AI] {}. {} {}", ply, mover, mv);
        played.push(mv.to_string());
    }

    if board.is_checkmate() {
        info!("[AI] Checkmate, {} wins", board.side_to_move().opponent());
    } else if board.is_draw() {
        info!("[AI] Draw");
    } else {
        info!("[AI] Ply limit reached, game unfinished");
    }

    println!("{}", played.join(" "));
    println!("{}", board.fen());
    Ok(())
}
