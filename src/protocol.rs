//! Line-based text protocol for playing against the engine.
//!
//! Each input line holds one command with an optional numeric id prefix.
//! Successful responses start with `=`, failures with `?`, both followed by
//! the id (if any), the message and an empty line:
//!
//! ```text
//! 1 play 1 1
//! =1 0 0
//!
//! genmove
//! = 2 0
//!
//! ```
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `boardsize <n> [k]` - Start a new game on an `n`x`n` board, `k` in a row (default `n`)
//! - `depth <d>` - Set the search depth ceiling
//! - `clear_board` - Start a new game with the current settings
//! - `play <x> <y>` - Play for the side to move; the engine replies if it is its turn
//! - `genmove` - Let the engine play for the side to move (`none` if it finds no move)
//! - `showboard` - Print the board
//! - `status` - `in_progress`, `draw`, `X wins` or `O wins`

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::board::GameStatus;
use crate::error::GameError;
use crate::game::{Game, GameConfig};

/// The list of known protocol commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "depth",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "status",
    "version",
];

/// Protocol session state.
pub struct ProtocolEngine {
    config: GameConfig,
    game: Game,
}

impl ProtocolEngine {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let game = Game::new(config)?;
        Ok(Self { config, game })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!("command {command:?} failed: {message}");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(size) = args.first().and_then(|s| s.parse::<usize>().ok()) else {
                    return (false, "invalid size".to_string());
                };
                let win_length = match args.get(1) {
                    Some(k) => match k.parse::<usize>() {
                        Ok(k) => k,
                        Err(_) => return (false, "invalid win length".to_string()),
                    },
                    None => size,
                };
                let config = GameConfig {
                    size,
                    win_length,
                    ..self.config
                };
                match Game::new(config) {
                    Ok(game) => {
                        self.config = config;
                        self.game = game;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "depth" => match args.first().and_then(|s| s.parse::<usize>().ok()) {
                Some(depth) => {
                    self.config.max_depth = depth;
                    self.game.engine_mut().set_max_depth(depth);
                    (true, String::new())
                }
                None => (false, "invalid depth".to_string()),
            },

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "play" => {
                let coords: Result<Vec<usize>, _> = args.iter().map(|s| s.parse()).collect();
                let Ok(&[x, y]) = coords.as_deref() else {
                    return (false, "expected two coordinates".to_string());
                };
                if let Err(err) = self.game.play_human_move(x, y) {
                    return (false, err.to_string());
                }
                if self.game.engine_to_move() && !self.game.status().is_over() {
                    return self.genmove();
                }
                (true, String::new())
            }

            "genmove" => self.genmove(),

            "showboard" => (true, format!("\n{}", self.game.board())),

            "status" => {
                let status = match self.game.status() {
                    GameStatus::InProgress => "in_progress".to_string(),
                    GameStatus::Draw => "draw".to_string(),
                    GameStatus::Won(mark) => format!("{} wins", mark.to_char()),
                };
                (true, status)
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn genmove(&mut self) -> (bool, String) {
        match self.game.play_engine_move() {
            Ok(Some(mv)) => (true, format!("{} {}", mv.x, mv.y)),
            Ok(None) => (true, "none".to_string()),
            Err(err) => (false, err.to_string()),
        }
    }
}
