//! Session configuration.
//!
//! Defaults give the classic setup: the machine plays Black with the greedy
//! engine at difficulty 0. `from_env` overlays `VIDEO_CHESS_*` variables;
//! values that do not parse are logged and skipped.

use tracing::warn;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::search::board_scoring::clamp_difficulty;

pub const ENV_DIFFICULTY: &str = "VIDEO_CHESS_DIFFICULTY";
pub const ENV_MACHINE: &str = "VIDEO_CHESS_MACHINE";
pub const ENV_ENGINE: &str = "VIDEO_CHESS_ENGINE";
pub const ENV_SEED: &str = "VIDEO_CHESS_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    #[default]
    Greedy,
    Random,
}

impl EngineKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "greedy" => Some(EngineKind::Greedy),
            "random" => Some(EngineKind::Random),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub difficulty: u8,
    pub machine_color: Color,
    pub engine: EngineKind,
    /// Seed for the random engine; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: 0,
            machine_color: Color::Black,
            engine: EngineKind::Greedy,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DIFFICULTY) {
            match raw.trim().parse::<i32>() {
                Ok(level) => config.difficulty = clamp_difficulty(level),
                Err(_) => warn!(variable = ENV_DIFFICULTY, value = %raw, "ignoring invalid difficulty"),
            }
        }

        if let Some(raw) = lookup(ENV_MACHINE) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "white" => config.machine_color = Color::White,
                "black" => config.machine_color = Color::Black,
                _ => warn!(variable = ENV_MACHINE, value = %raw, "ignoring invalid machine color"),
            }
        }

        if let Some(raw) = lookup(ENV_ENGINE) {
            match EngineKind::parse(&raw) {
                Some(kind) => config.engine = kind,
                None => warn!(variable = ENV_ENGINE, value = %raw, "ignoring unknown engine"),
            }
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(variable = ENV_SEED, value = %raw, "ignoring invalid seed"),
            }
        }

        config
    }

    pub fn build_engine(&self) -> Box<dyn Engine> {
        match self.engine {
            EngineKind::Greedy => Box::new(GreedyEngine::new(self.difficulty)),
            EngineKind::Random => match self.seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = SessionConfig::from_lookup(|_| None);
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.machine_color, Color::Black);
    }

    #[test]
    fn variables_override_defaults() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            (ENV_DIFFICULTY, "11"),
            (ENV_MACHINE, "White"),
            (ENV_ENGINE, "random"),
            (ENV_SEED, "99"),
        ]));
        assert_eq!(config.difficulty, 7);
        assert_eq!(config.machine_color, Color::White);
        assert_eq!(config.engine, EngineKind::Random);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.build_engine().name(), "Video Chess Random");
    }

    #[test]
    fn invalid_variables_are_skipped() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            (ENV_DIFFICULTY, "hard"),
            (ENV_MACHINE, "purple"),
            (ENV_ENGINE, "minimax"),
            (ENV_SEED, "-4"),
        ]));
        assert_eq!(config, SessionConfig::default());
    }
}
