//! Crate root module declarations for the Video Chess engine.
//!
//! Exposes the game state and piece encoding, move generation and the move
//! executor, the greedy opponent, the session facade and the notation helpers
//! so the terminal binary, benches and external front ends share one set of
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod legal_move_generator;
    pub mod move_apply;
    pub mod move_validator;
    pub mod perft;
    pub mod pseudo_move_generator;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_record;
    pub mod render_game_state;
}
