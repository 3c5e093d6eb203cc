// Battlesnake bot: lifecycle hooks and per-turn move choice
//
// Each /move request is answered from the request alone. Nothing about a game
// is remembered between turns; start and end only log.

use log::info;
use serde_json::{json, Value};
use std::time::Instant;

use crate::board::Snapshot;
use crate::config::Config;
use crate::debug_logger::{self, DebugLogEntry, DebugLogger};
use crate::selector::{self, MoveDecision};
use crate::types::{Battlesnake, Board, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and no debug log
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Self::with_debug_logger(config, DebugLogger::disabled())
    }

    /// Creates a Bot that records every decision to `debug_logger`
    pub fn with_debug_logger(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
            "version": appearance.version,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME START {}", game.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER {} after {} turns", game.id, turn);
    }

    /// Runs the selector for `you` on `board` with the configured strategy
    pub fn decide(&self, board: &Board, you: &Battlesnake) -> MoveDecision {
        let snapshot = Snapshot::new(board, you);
        selector::select_move(&snapshot, self.config.strategy.area_strategy)
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Arguments
    /// * `game` - Current game metadata
    /// * `turn` - Current turn number, only used for logging
    /// * `board` - Current board state
    /// * `you` - Your snake's current state
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub fn get_move(&self, game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        let start_time = Instant::now();
        let decision = self.decide(board, you);

        if decision.fallback {
            info!("MOVE {}: No safe moves detected! Moving {}", turn, decision.direction);
        } else {
            info!(
                "MOVE {}: {} (area: {:?}, candidates: {}, time: {}us)",
                turn,
                decision.direction,
                decision.chosen_score(),
                decision.scores.len(),
                start_time.elapsed().as_micros()
            );
        }

        if self.debug_logger.is_enabled() {
            self.debug_logger.log_move(DebugLogEntry {
                game_id: game.id.clone(),
                turn: *turn,
                you_id: you.id.clone(),
                chosen_move: decision.direction,
                area_score: decision.chosen_score(),
                fallback: decision.fallback,
                board: board.clone(),
                timestamp: debug_logger::timestamp(),
            });
        }

        json!({ "move": decision.direction.as_str() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    #[test]
    fn test_info_reports_configured_appearance() {
        let bot = Bot::new(Config::default_hardcoded());
        let info = bot.info();
        assert_eq!(info["apiversion"], "1");
        assert_eq!(info["color"], "#81D8D0");
        assert_eq!(info["head"], "rudolph");
        assert_eq!(info["tail"], "present");
    }

    #[test]
    fn test_get_move_returns_move_field() {
        let bot = Bot::new(Config::default_hardcoded());
        let me = Battlesnake {
            id: "me".to_string(),
            name: "me".to_string(),
            health: 100,
            body: vec![Coord::new(10, 5)],
            head: Coord::new(10, 5),
            length: 1,
            latency: "0".to_string(),
            shout: None,
        };
        let board = Board {
            height: 11,
            width: 11,
            food: vec![],
            snakes: vec![me.clone()],
            hazards: vec![],
        };
        let game = Game {
            id: "game".to_string(),
            ruleset: json!({}),
            timeout: 500,
            source: "test".to_string(),
        };

        let response = bot.get_move(&game, &0, &board, &me);
        assert_eq!(response["move"], "up");
    }
}
