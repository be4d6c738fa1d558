//! Minmax-Rust: a K-in-a-row minimax engine.
//!
//! ## Usage
//!
//! - `minmax-rust` - Show a demo
//! - `minmax-rust play` - Play against the engine over the text protocol
//! - `minmax-rust selfplay` - Watch the engine play a whole game
//!
//! Set `RUST_LOG=debug` to see search results on stderr.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use minmax_rust::board::{Board, GameStatus};
use minmax_rust::constants::{DEFAULT_BOARD_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_WIN_LENGTH};
use minmax_rust::game::{Game, GameConfig};
use minmax_rust::playout::random_move;
use minmax_rust::protocol::ProtocolEngine;
use minmax_rust::search::Engine;

/// Minmax-Rust: a K-in-a-row minimax engine
#[derive(Parser)]
#[command(name = "minmax-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Marks in a row needed to win
    #[arg(long, global = true, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Search depth ceiling in plies
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine using the line-based text protocol
    Play {
        /// Let the human play Cross and move first
        #[arg(long)]
        human_first: bool,
    },
    /// Let the engine play a whole game and print every position
    Selfplay {
        /// Have Circle pick random moves instead of searching
        #[arg(long)]
        random_opponent: bool,
        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        size: cli.size,
        win_length: cli.win_length,
        max_depth: cli.depth,
        engine_maximizes: true,
    };

    match cli.command {
        Some(Commands::Play { human_first }) => {
            let config = GameConfig {
                engine_maximizes: !human_first,
                ..config
            };
            let mut engine = ProtocolEngine::new(config).context("invalid game configuration")?;
            engine.run().context("text protocol I/O failed")?;
        }
        Some(Commands::Selfplay {
            random_opponent,
            seed,
        }) => run_selfplay(config, random_opponent, seed)?,
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_selfplay(config: GameConfig, random_opponent: bool, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(config).context("invalid game configuration")?;
    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

    while !game.status().is_over() {
        let mark = game.side_to_move().to_char();
        let mv = if random_opponent && !game.engine_to_move() {
            let Some(mv) = random_move(game.board(), &mut rng) else {
                break;
            };
            game.play_human_move(mv.x, mv.y)?;
            mv
        } else {
            match game.play_engine_move()? {
                Some(mv) => mv,
                None => bail!("engine found no move; raise --depth above 0"),
            }
        };
        println!("{mark} plays {mv}");
        println!("{}", game.board());
    }

    match game.status() {
        GameStatus::Won(mark) => println!("{} wins", mark.to_char()),
        GameStatus::Draw => println!("Draw"),
        GameStatus::InProgress => println!("Game stopped"),
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Minmax-Rust: K-in-a-row Minimax Engine\n");

    // Demo 1: win detection
    println!("=== Board Demo ===");
    let board = Board::from_rows(3, &["X O .", ". X O", ". . X"])?;
    println!("{board}");
    println!("Winner: {}\n", board.check_winner().to_char());

    // Demo 2: search
    println!("=== Search Demo ===");
    let mut board = Board::from_rows(3, &["X X .", "O O .", ". . ."])?;
    println!("{board}");
    let mut engine = Engine::new(DEFAULT_MAX_DEPTH);
    for maximizing in [true, false] {
        let side = if maximizing { "X" } else { "O" };
        let result = engine.best_move(&mut board, maximizing);
        match result.best_move {
            Some(mv) => println!(
                "{side} to move: best {mv}, score {} ({} nodes)",
                result.score,
                engine.nodes()
            ),
            None => println!("{side} to move: no move"),
        }
    }
    Ok(())
}
