//! Headless runner (default binary).
//!
//! Plays the simulation without any terminal or window: a small seeded bot
//! picks a rotation and a column for every piece, lets a few ticks pass, then
//! hard-drops. Handy for smoke-testing a configuration file and watching the
//! score hooks fire.
//!
//! Usage: `tetro-field [config.json]`

use std::time::Instant;

use anyhow::{Context, Result};

use tetro_field::core::{Game, GameConfig, GameEvents, ScoreKeeper, SimpleRng};
use tetro_field::types::{GameAction, TICK_MS};

/// Stop after this many pieces even if the bot survives
const MAX_PIECES: u32 = 500;

/// Ticks the bot waits before dropping each piece
const TICKS_PER_PIECE: u32 = 8;

/// Score collaborator that logs every notification
struct ConsoleScore {
    keeper: ScoreKeeper,
}

impl GameEvents for ConsoleScore {
    fn on_lines_cleared(&mut self, count: u32) {
        self.keeper.on_lines_cleared(count);
        println!(
            "[Score] {} line(s) cleared, score {}",
            count,
            self.keeper.score()
        );
    }

    fn on_game_over(&mut self) {
        self.keeper.on_game_over();
        println!(
            "[Score] Game over at {} (high score {})",
            self.keeper.score(),
            self.keeper.high_score()
        );
    }

    fn on_restart(&mut self) {
        self.keeper.on_restart();
        println!("[Score] New round");
    }
}

fn load_config() -> Result<GameConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(GameConfig::default());
    };

    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading config {}", path))?;
    GameConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path))
}

fn main() -> Result<()> {
    let config = load_config()?;
    println!(
        "[Runner] Board {}x{}, step {}ms, lock {}ms, seed {}",
        config.board_width,
        config.board_height,
        config.step_delay_ms,
        config.lock_delay_ms,
        config.seed
    );

    let events = ConsoleScore {
        keeper: ScoreKeeper::new(),
    };
    let mut game = Game::new(config, events).context("invalid game config")?;
    game.start();

    let mut bot = SimpleRng::new(config.seed.wrapping_add(1));
    let started = Instant::now();

    while !game.game_over() && game.pieces_spawned() < MAX_PIECES {
        for _ in 0..bot.next_range(4) {
            game.apply_action(GameAction::RotateCw);
        }

        let target = bot.next_range(config.board_width as u32) as i32 - config.board_width / 2;
        let action = if target < 0 {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        for _ in 0..target.unsigned_abs() {
            if !game.apply_action(action) {
                break;
            }
        }

        for _ in 0..TICKS_PER_PIECE {
            game.tick(TICK_MS);
        }
        game.apply_action(GameAction::HardDrop);
    }

    let keeper = game.events().keeper;
    println!(
        "[Runner] {} pieces in {:?}: score {}, lines {}, game over: {}",
        game.pieces_spawned(),
        started.elapsed(),
        keeper.score(),
        keeper.lines(),
        game.game_over()
    );
    if !game.game_over() {
        eprintln!("[Runner] Piece limit reached before game over");
    }

    Ok(())
}
