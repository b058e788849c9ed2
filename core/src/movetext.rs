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

//! Move text: `<start><end>[promo]`, e.g. `e2e4` or `a7a8q`.
//!
//! Move text alone cannot carry flag, moving-piece, or captured-piece
//! information, so parsing it requires a board: the decoded `(start, end,
//! promotion)` triple is matched against the board's current legal move
//! list, and the matching [`Move`] is returned verbatim.

use crate::board::Board;
use crate::error::{IllegalMoveError, MoveTextError};
use crate::moves::Move;
use crate::perft::legal_moves;
use crate::piece::PieceType;
use crate::square::Square;

/// Parse `text` against `board`'s current legal move list.
///
/// # Errors
/// Returns [`MoveTextError::Malformed`] or [`MoveTextError::BadPromotionLetter`]
/// if `text` cannot even be decoded into a `(start, end, promotion)` triple,
/// and [`MoveTextError::NotLegal`] if that triple matches no legal move.
pub fn parse(board: &mut Board, text: &str) -> Result<Move, MoveTextError> {
    let (start, end, promotion) = decode(text)?;
    legal_moves(board)
        .into_iter()
        .find(|m| m.start == start && m.end == end && m.promotion_type() == promotion)
        .ok_or_else(|| {
            log::warn!("rejecting move text not in the legal move list: {text}");
            MoveTextError::NotLegal(IllegalMoveError { text: text.to_string() })
        })
}

fn decode(text: &str) -> Result<(Square, Square, Option<PieceType>), MoveTextError> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(MoveTextError::Malformed(text.to_string()));
    }
    let start = Square::from_algebraic(&text[0..2]).ok_or_else(|| MoveTextError::Malformed(text.to_string()))?;
    let end = Square::from_algebraic(&text[2..4]).ok_or_else(|| MoveTextError::Malformed(text.to_string()))?;
    let promotion = match bytes.get(4) {
        None => None,
        Some(&b'n') => Some(PieceType::Knight),
        Some(&b'b') => Some(PieceType::Bishop),
        Some(&b'r') => Some(PieceType::Rook),
        Some(&b'q') => Some(PieceType::Queen),
        Some(&c) => return Err(MoveTextError::BadPromotionLetter(c as char)),
    };
    Ok((start, end, promotion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legal_pawn_push() {
        let mut board = Board::new();
        let m = parse(&mut board, "e2e4").unwrap();
        assert!(m.is_double_pawn_push());
    }

    #[test]
    fn parses_promotion() {
        let mut board = crate::fen::parse("7k/P7/8/8/8/8/8/7K w - - 0 1").unwrap();
        let m = parse(&mut board, "a7a8q").unwrap();
        assert_eq!(m.promotion_type(), Some(PieceType::Queen));
    }

    #[test]
    fn rejects_pseudo_legal_but_illegal_move() {
        // White king on e1 pinned diagonally would be a richer test; here we
        // simply assert that a move absent from the legal list is rejected.
        let mut board = Board::new();
        let err = parse(&mut board, "e2e5").unwrap_err();
        assert!(matches!(err, MoveTextError::NotLegal(_)));
    }

    #[test]
    fn rejects_malformed_text() {
        let mut board = Board::new();
        assert!(matches!(parse(&mut board, "e2").unwrap_err(), MoveTextError::Malformed(_)));
    }
}
