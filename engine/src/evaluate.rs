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

//! Static evaluation: material plus piece-square tables, from the
//! side-to-move's perspective.

use bitrook_core::{Board, Color};

use crate::{material, pst};

/// Material plus piece-square balance, centipawns, positive if good for
/// `board.side_to_move`.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let white_relative = material::balance(board) + pst::balance(board);
    match board.side_to_move {
        Color::White => white_relative,
        Color::Black => -white_relative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_zero_for_either_side() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn missing_own_queen_is_negative() {
        let board = bitrook_core::fen::parse(
            "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        )
        .unwrap();
        assert!(evaluate(&board) < 0);
    }

    #[test]
    fn score_flips_sign_with_side_to_move() {
        let white_to_move = bitrook_core::fen::parse(
            "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        )
        .unwrap();
        let mut black_to_move = white_to_move.clone();
        black_to_move.side_to_move = Color::Black;
        assert_eq!(evaluate(&white_to_move), -evaluate(&black_to_move));
    }
}
