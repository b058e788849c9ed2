/*
  Bitrook, a bitboard chess move-generation and search engine.
  Copyright (C) 2024 The Bitrook Authors (see AUTHORS.md file)

  Bitrook is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Bitrook is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! FEN: six space-separated fields describing a position. The codec is
//! bidirectional; [`to_fen`] of a parsed board reproduces the canonical
//! string field-for-field.

use std::convert::TryFrom;

use crate::board::Board;
use crate::castling::{BLACK_KINGSIDE, BLACK_QUEENSIDE, WHITE_KINGSIDE, WHITE_QUEENSIDE};
use crate::castling::CastleRights;
use crate::error::FenError;
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;

/// Parse a FEN string into a [`Board`].
///
/// # Errors
/// Returns a [`FenError`] describing the first field that fails to parse;
/// never panics on malformed input.
pub fn parse(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        log::warn!("rejecting FEN with {} fields: {fen}", fields.len());
        return Err(FenError::WrongFieldCount { found: fields.len() });
    }

    let mut board = Board::empty();
    parse_placement(&mut board, fields[0])?;
    board.update_occupancies();
    board.side_to_move = parse_side_to_move(fields[1])?;
    board.castle_rights = parse_castling_rights(fields[2])?;
    board.en_passant_square = parse_en_passant(fields[3])?;
    board.halfmove_clock = parse_counter("halfmove clock", fields[4])?;
    board.fullmove_number = parse_counter("fullmove number", fields[5])?;

    Ok(board)
}

fn parse_placement(board: &mut Board, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadPlacement(field.to_string()));
    }
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let mut file = 0u8;
        for c in rank_str.chars() {
            if file >= 8 {
                return Err(FenError::BadPlacement(field.to_string()));
            }
            if let Some(run) = c.to_digit(10) {
                file += run as u8;
                continue;
            }
            let piece = piece_from_letter(c).ok_or(FenError::UnknownPieceLetter(c))?;
            board.set_piece(Square::new(rank_from_top as u8, file), piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadPlacement(field.to_string()));
        }
    }
    Ok(())
}

fn piece_from_letter(c: char) -> Option<Piece> {
    let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
    let piece_type = match c.to_ascii_uppercase() {
        'P' => PieceType::Pawn,
        'B' => PieceType::Bishop,
        'N' => PieceType::Knight,
        'R' => PieceType::Rook,
        'Q' => PieceType::Queen,
        'K' => PieceType::King,
        _ => return None,
    };
    Some(Piece::new(color, piece_type))
}

fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::BadSideToMove(field.to_string())),
    }
}

fn parse_castling_rights(field: &str) -> Result<CastleRights, FenError> {
    if field == "-" {
        return Ok(CastleRights::NONE);
    }
    let mut rights = CastleRights::NONE;
    for c in field.chars() {
        let index = match c {
            'K' => WHITE_KINGSIDE,
            'Q' => WHITE_QUEENSIDE,
            'k' => BLACK_KINGSIDE,
            'q' => BLACK_QUEENSIDE,
            _ => return Err(FenError::BadCastlingRights(field.to_string())),
        };
        rights.set(index, true);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    Square::from_algebraic(field).map(Some).ok_or(FenError::BadEnPassantSquare(field.to_string()))
}

fn parse_counter(name: &'static str, field: &str) -> Result<u32, FenError> {
    field
        .parse()
        .map_err(|_| FenError::BadCounter { field: name, value: field.to_string() })
}

/// Serialize `board` to its canonical FEN string.
#[must_use]
pub fn to_fen(board: &Board) -> String {
    let mut placement = String::new();
    for rank_from_top in 0..8u8 {
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            let piece = board.piece_at(Square::new(rank_from_top, file));
            match piece.letter() {
                None => empty_run += 1,
                Some(c) => {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    placement.push(c);
                }
            }
        }
        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
        if rank_from_top != 7 {
            placement.push('/');
        }
    }

    let side = if board.side_to_move == Color::White { "w" } else { "b" };
    let ep = board.en_passant_square.map_or("-".to_string(), |s| s.to_string());

    format!(
        "{placement} {side} {} {ep} {} {}",
        board.castle_rights, board.halfmove_clock, board.fullmove_number
    )
}

impl TryFrom<&str> for Board {
    type Error = FenError;
    fn try_from(fen: &str) -> Result<Board, FenError> {
        parse(fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_FEN;

    #[test]
    fn round_trip_ground_truth_fens() {
        let fens = [
            START_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
        ];
        for fen in fens {
            let board = parse(fen).expect("valid ground-truth FEN");
            assert_eq!(to_fen(&board), fen, "round-trip mismatch for {fen}");
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(parse("rnbqkbnr/8 w - - 0 1 extra"), Err(FenError::WrongFieldCount { found: 7 }));
    }

    #[test]
    fn rejects_unknown_piece_letter() {
        assert_eq!(
            parse("znbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::UnknownPieceLetter('z'))
        );
    }

    #[test]
    fn rejects_bad_side_to_move() {
        assert_eq!(
            parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::BadSideToMove("x".to_string()))
        );
    }
}
