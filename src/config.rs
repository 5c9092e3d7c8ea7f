//! Runtime configuration read from `ARENA_*` environment variables.
//!
//! Every variable is optional. Values that fail to parse, or a board smaller
//! than `MIN_COLS x MIN_ROWS`, fall back to the reference defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::{GameConfig, Randomizer, MIN_COLS, MIN_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Terminal columns per board cell
    pub cell_width: u16,
    /// Terminal rows per board cell
    pub cell_height: u16,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            cell_width: 2,
            cell_height: 1,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let game = GameConfig {
            cols: parse_var(&lookup, "ARENA_COLS")
                .filter(|&n: &usize| n >= MIN_COLS)
                .unwrap_or(defaults.game.cols),
            rows: parse_var(&lookup, "ARENA_ROWS")
                .filter(|&n: &usize| n >= MIN_ROWS)
                .unwrap_or(defaults.game.rows),
            drop_interval_ms: parse_var(&lookup, "ARENA_DROP_MS")
                .unwrap_or(defaults.game.drop_interval_ms),
            seed: parse_var(&lookup, "ARENA_SEED").unwrap_or(defaults.game.seed),
            randomizer: lookup("ARENA_RANDOMIZER")
                .and_then(|s| Randomizer::from_str(&s))
                .unwrap_or_default(),
        };

        let log_path = lookup("ARENA_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            game,
            cell_width: parse_var(&lookup, "ARENA_CELL_WIDTH")
                .filter(|&n: &u16| n > 0)
                .unwrap_or(defaults.cell_width),
            cell_height: parse_var(&lookup, "ARENA_CELL_HEIGHT")
                .filter(|&n: &u16| n > 0)
                .unwrap_or(defaults.cell_height),
            log_path,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
