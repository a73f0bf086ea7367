//! Crate root module declarations for the mailbox chess rules engine.
//!
//! Exposes the board state, movement tables, move generation (per-piece
//! candidates, king safety, castling legality, move application) and the FEN
//! and rendering utilities under stable module paths.

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
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::{MoveError, ParseError};
pub use game_state::chess_types::{
    CastleSide, CastlingRights, Color, Move, Piece, PieceKind, Position, PositionRecord,
    SideCastlingRights, Square,
};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::{checkers, is_king_in_check, king_square};
pub use move_generation::legal_move_generator::{game_status, GameStatus, LegalMoveGenerator};
pub use move_generation::move_generator::{
    generate_moves, MoveGenResult, MoveGenerator, PseudoLegalMoveGenerator,
};
