//! Uniform random-move engine.
//!
//! Picks any legal move for the side to move. Used for diagnostics, seeded
//! random playouts in tests, and as a weaker opponent than the greedy scorer.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Video Chess Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("seed") {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ChessError::InvalidOptionValue {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
            self.rng = StdRng::seed_from_u64(seed);
            return Ok(());
        }

        if name.eq_ignore_ascii_case("difficulty") {
            debug!(value, "random engine ignores difficulty");
            return Ok(());
        }

        Err(ChessError::UnknownOption(name.to_owned()))
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let legal_moves = generate_legal_moves(game_state, game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| ChessError::EngineFailure("failed to choose a random move".to_owned()))?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
