use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::MoveRecord;
use crate::search::board_scoring::{clamp_difficulty, score_move};

/// Highest-scoring legal move for `color`, first one wins ties.
pub fn select_move(game_state: &GameState, color: Color, difficulty: u8) -> Option<MoveRecord> {
    select_scored_move(game_state, color, difficulty).map(|(mv, _)| mv)
}

fn select_scored_move(
    game_state: &GameState,
    color: Color,
    difficulty: u8,
) -> Option<(MoveRecord, i32)> {
    let mut best: Option<(MoveRecord, i32)> = None;

    for mv in generate_legal_moves(game_state, color) {
        let score = score_move(&mv, difficulty);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    best
}

pub struct GreedyEngine {
    difficulty: u8,
}

impl GreedyEngine {
    pub fn new(difficulty: u8) -> Self {
        Self {
            difficulty: clamp_difficulty(difficulty as i32),
        }
    }

    #[inline]
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Video Chess Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if !name.eq_ignore_ascii_case("difficulty") {
            return Err(ChessError::UnknownOption(name.to_owned()));
        }

        let level = value
            .trim()
            .parse::<i32>()
            .map_err(|_| ChessError::InvalidOptionValue {
                name: name.to_owned(),
                value: value.to_owned(),
            })?;
        self.difficulty = clamp_difficulty(level);
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let side = game_state.side_to_move;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "greedy_engine side {} difficulty {}",
            side.name(),
            self.difficulty
        ));

        if let Some((mv, score)) = select_scored_move(game_state, side, self.difficulty) {
            out.info_lines
                .push(format!("greedy_engine score {} move {}->{}", score, mv.source, mv.dest));
            out.best_move = Some(mv);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn takes_the_most_valuable_piece() {
        // White queen d1 can take a knight on d5 or a rook on h5 (via d1-h5).
        let state = GameState::from_fen("4k3/8/8/3n3r/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let mv = select_move(&state, Color::White, 0).expect("white has moves");
        assert_eq!(mv.squares(), (3, 39));
        assert_eq!(mv.captured_kind(), Some(PieceKind::Rook));
    }

    #[test]
    fn prefers_the_king_above_everything() {
        let state = GameState::from_fen("q3k3/8/8/8/8/8/4Q3/K7 w - - 0 1").expect("FEN should parse");
        let mv = select_move(&state, Color::White, 0).expect("white has moves");
        assert_eq!(mv.squares(), (12, 60));
    }

    #[test]
    fn opening_reply_is_first_central_move() {
        // No captures available: the first move landing in the centre wins the tie.
        let state = GameState::new_game();
        let mv = select_move(&state, Color::Black, 0).expect("black has moves");
        assert_eq!(mv.squares(), (50, 42));
    }

    #[test]
    fn difficulty_bias_does_not_change_the_choice() {
        let state = GameState::new_game();
        let easy = select_move(&state, Color::Black, 0);
        let hard = select_move(&state, Color::Black, 7);
        assert_eq!(easy, hard);
    }

    #[test]
    fn no_legal_moves_selects_nothing() {
        let state = GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(select_move(&state, Color::Black, 0), None);
    }

    #[test]
    fn engine_reports_the_selected_move() {
        let state = GameState::new_game();
        let mut engine = GreedyEngine::new(3);
        let out = engine.choose_move(&state).expect("greedy engine should not fail");
        assert_eq!(out.best_move.map(|mv| mv.squares()), Some((1, 18)));
        assert!(!out.info_lines.is_empty());
    }

    #[test]
    fn difficulty_option_parses_and_clamps() {
        let mut engine = GreedyEngine::default();
        engine.set_option("Difficulty", "12").expect("numeric value accepted");
        assert_eq!(engine.difficulty(), 7);
        engine.set_option("difficulty", "-1").expect("numeric value accepted");
        assert_eq!(engine.difficulty(), 0);

        assert!(matches!(
            engine.set_option("Difficulty", "hard"),
            Err(ChessError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            engine.set_option("Hash", "16"),
            Err(ChessError::UnknownOption(_))
        ));
    }
}
