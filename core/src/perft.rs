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

//! Legality filtering, perft, and divide. A pseudo-legal move is legal iff,
//! after it is made, the side that just moved does not have its king
//! attacked; this is checked by make/unmake rather than by pre-computing
//! pins and checkers, trading a little speed for a generator simple enough
//! to trust.

use crate::board::Board;
use crate::error::DriverError;
use crate::moves::Move;
use crate::movegen::pseudo_legal_moves;

/// Is the move `m`, made against `board`, legal? Leaves `board` unchanged.
fn is_legal(board: &mut Board, m: Move) -> bool {
    let mover = board.side_to_move;
    board.make_move(m);
    let safe = !board.is_square_attacked_by(board.king_square(mover), board.side_to_move);
    board.unmake_move();
    safe
}

/// Every legal move for `board.side_to_move`: the pseudo-legal move list,
/// filtered to those that do not leave the mover's king in check.
#[must_use]
pub fn legal_moves(board: &mut Board) -> Vec<Move> {
    pseudo_legal_moves(board).into_iter().filter(|&m| is_legal(board, m)).collect()
}

/// Is `board.side_to_move` currently in check?
#[must_use]
pub fn in_check(board: &Board) -> bool {
    let side = board.side_to_move;
    board.is_square_attacked_by(board.king_square(side), !side)
}

/// Count the leaf positions reachable by `depth` plies of legal play from
/// `board`. Depth 0 counts the root itself as a single leaf.
#[must_use]
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for m in pseudo_legal_moves(board) {
        let mover = board.side_to_move;
        board.make_move(m);
        if !board.is_square_attacked_by(board.king_square(mover), board.side_to_move) {
            nodes += perft(board, depth - 1);
        }
        board.unmake_move();
    }
    nodes
}

/// A per-root-move perft breakdown: for each legal move from `board`, its
/// move text and the perft count rooted after playing it. The counts sum to
/// `perft(board, depth)`.
///
/// # Errors
/// Returns [`DriverError::ZeroDepth`] if `depth` is 0, since there is no
/// meaningful per-move breakdown of a zero-ply search.
pub fn divide(board: &mut Board, depth: u32) -> Result<Vec<(Move, u64)>, DriverError> {
    if depth == 0 {
        return Err(DriverError::ZeroDepth);
    }
    let mut breakdown = Vec::new();
    for m in pseudo_legal_moves(board) {
        let mover = board.side_to_move;
        board.make_move(m);
        if !board.is_square_attacked_by(board.king_square(mover), board.side_to_move) {
            breakdown.push((m, perft(board, depth - 1)));
        }
        board.unmake_move();
    }
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_perft(fen: &str, counts: &[u64]) {
        let mut board = crate::fen::parse(fen).unwrap();
        for (i, &expected) in counts.iter().enumerate() {
            let depth = (i + 1) as u32;
            assert_eq!(perft(&mut board, depth), expected, "perft({depth}) mismatch for {fen}");
        }
    }

    #[test]
    fn perft_starting_position() {
        assert_perft(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &[20, 400, 8902],
        );
    }

    #[test]
    fn perft_kiwipete() {
        assert_perft("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", &[48, 2039]);
    }

    #[test]
    fn perft_rook_endgame_position() {
        assert_perft("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2812]);
    }

    #[test]
    fn perft_promotion_heavy_position() {
        assert_perft("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1", &[6, 264]);
    }

    #[test]
    fn perft_discovered_check_position() {
        assert_perft("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8", &[44, 1486]);
    }

    #[test]
    fn perft_castling_endgame_position() {
        assert_perft("r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10", &[46, 2079]);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::new();
        let breakdown = divide(&mut board, 3).unwrap();
        let sum: u64 = breakdown.iter().map(|(_, n)| n).sum();
        assert_eq!(sum, perft(&mut board, 3));
        assert_eq!(breakdown.len(), 20);
    }

    #[test]
    fn divide_rejects_zero_depth() {
        let mut board = Board::new();
        assert_eq!(divide(&mut board, 0), Err(DriverError::ZeroDepth));
    }

    #[test]
    fn double_push_sets_and_clears_en_passant() {
        let mut board = Board::new();
        let moves = legal_moves(&mut board);
        let e4 = moves.iter().find(|m| m.to_text() == "e2e4").expect("e2e4 is legal");
        assert!(e4.is_double_pawn_push());
        board.make_move(*e4);
        assert_eq!(board.en_passant_square, Some(crate::square::Square::E3));
        board.unmake_move();
        assert!(board.en_passant_square.is_none());
    }
}
