//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string.
//! Nothing partial is returned: any malformed field rejects the whole string.

use tracing::debug;

use crate::chess_errors::ParseError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Grid;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, ParseError> {
    parse_fields(fen).inspect_err(|err| debug!(%fen, %err, "rejected FEN"))
}

fn parse_fields(fen: &str) -> Result<Position, ParseError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    let mut position = Position::new_empty();

    position.grid = parse_placement(board_part)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant_target = parse_en_passant_square(en_passant_part)?;
    position.halfmove_clock = parse_counter("halfmove clock", halfmove_part)?;
    position.fullmove_number = parse_counter("fullmove number", fullmove_part)?;

    Ok(position)
}

/// Parses the ranks field (rank 8 first) into a grid.
pub fn parse_placement(board_part: &str) -> Result<Grid, ParseError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::RankCount(ranks.len()));
    }

    let mut grid: Grid = [[None; 8]; 8];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ParseError::InvalidEmptyCount(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ParseError::InvalidPiece(ch))?;
            if file >= 8 {
                return Err(ParseError::RankWidth((*rank_str).to_owned()));
            }

            grid[board_rank][file] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err(ParseError::RankWidth((*rank_str).to_owned()));
        }
    }

    Ok(grid)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ParseError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ParseError::InvalidSide(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ParseError> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            _ => return Err(ParseError::InvalidCastling(castling_part.to_owned())),
        };
        if rights.has(color, side) {
            return Err(ParseError::InvalidCastling(castling_part.to_owned()));
        }
        rights.grant(color, side);
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ParseError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part).map(Some)
}

fn parse_counter(field: &'static str, token: &str) -> Result<u16, ParseError> {
    let invalid = || ParseError::InvalidCounter {
        field,
        token: token.to_owned(),
    };

    // Digits only; `u16::from_str` also takes a leading '+'.
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse::<u16>().map_err(|_| invalid())
}
