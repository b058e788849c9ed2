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

//! Fixed-depth negamax with alpha-beta pruning. No move ordering, no
//! quiescence, no transposition table: this search exists to validate the
//! move generator against perft-adjacent play, not to play strong chess.

use bitrook_core::{movegen, Board, Move};

use crate::config::SearchConfig;
use crate::evaluate::evaluate;

/// Search `board` to `config.depth` plies and return the best move found at
/// the root (`None` if the side to move has no legal moves) along with its
/// score, from `board.side_to_move`'s perspective.
pub fn search(board: &mut Board, config: SearchConfig) -> (Option<Move>, i32) {
    let (score, best_move) = alphabeta(board, -i32::MAX, i32::MAX, config.depth, true);
    if let Some(m) = best_move {
        log::info!("search depth {} best move {m} score {score}", config.depth);
    }
    (best_move, score)
}

/// `root` tracks the best move only at the top of the tree; deeper calls
/// only need the score.
fn alphabeta(board: &mut Board, mut alpha: i32, beta: i32, depth: u8, root: bool) -> (i32, Option<Move>) {
    if depth == 0 {
        return (evaluate(board), None);
    }

    let mover = board.side_to_move;
    let mut best_move = None;

    for m in movegen::pseudo_legal_moves(board) {
        board.make_move(m);
        if board.is_square_attacked_by(board.king_square(mover), board.side_to_move) {
            board.unmake_move();
            continue;
        }

        let (child_score, _) = alphabeta(board, -beta, -alpha, depth - 1, false);
        let score = -child_score;
        board.unmake_move();

        if score >= beta {
            return (beta, best_move);
        }
        if score > alpha {
            alpha = score;
            if root {
                best_move = Some(m);
            }
        }
    }

    (alpha, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitrook_core::fen;

    #[test]
    fn one_ply_search_prefers_a_free_pawn() {
        let mut board = fen::parse("7k/8/8/8/p7/8/8/R6K w - - 0 1").unwrap();
        let (best, _) = search(&mut board, SearchConfig::new(1));
        let best = best.expect("a capturing move exists");
        assert!(best.is_capture());
        assert_eq!(best.end, bitrook_core::Square::A4);
    }

    #[test]
    fn prefers_capturing_a_hanging_queen() {
        let mut board = fen::parse("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let (best, _) = search(&mut board, SearchConfig::new(2));
        let best = best.expect("a capturing move exists");
        assert!(best.is_capture());
        assert_eq!(best.end, bitrook_core::Square::D5);
    }

    #[test]
    fn depth_zero_returns_static_eval_and_no_move() {
        let mut board = Board::new();
        let (best, score) = search(&mut board, SearchConfig::new(0));
        assert_eq!(best, None);
        assert_eq!(score, evaluate(&board));
    }
}
