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

//! Material balance: a single centipawn value per piece type, no midgame/
//! endgame taper.

use bitrook_core::{Board, Color, PieceType};

#[must_use]
pub const fn value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 100,
        PieceType::Knight => 300,
        PieceType::Bishop => 350,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 10_000,
    }
}

/// White material minus black material, in centipawns. Positive favours
/// white regardless of whose turn it is; [`crate::evaluate::evaluate`]
/// applies the side-to-move sign.
#[must_use]
pub fn balance(board: &Board) -> i32 {
    let mut score = 0;
    for piece_type in PieceType::ALL {
        let count = board.piece_bitboard(Color::White, piece_type).len() as i32
            - board.piece_bitboard(Color::Black, piece_type).len() as i32;
        score += count * value(piece_type);
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(balance(&Board::new()), 0);
    }

    #[test]
    fn missing_queen_is_large_deficit() {
        let board = bitrook_core::fen::parse(
            "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        )
        .unwrap();
        assert_eq!(balance(&board), -value(PieceType::Queen));
    }
}
