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

//! Pseudo-legal move generation: every move the rules of piece movement
//! allow for the side to move, without regard to whether it leaves that
//! side's own king in check. [`crate::perft::legal_moves`] filters this list
//! down to legal moves by making and unmaking each one.

use crate::board::{
    Board, BLACK_KINGSIDE_EMPTY, BLACK_QUEENSIDE_EMPTY, WHITE_KINGSIDE_EMPTY, WHITE_QUEENSIDE_EMPTY,
};
use crate::magic::{KING_MOVES, KNIGHT_MOVES, MAGIC, PAWN_ATTACKS};
use crate::moves::Move;
use crate::piece::{Color, Piece, PieceType};
use crate::square::{Direction, Square};
use crate::Bitboard;

/// Every pseudo-legal move for `board.side_to_move`.
#[must_use]
pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    let side = board.side_to_move;

    generate_pawn_moves(board, side, &mut moves);
    for pt in [PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen, PieceType::King]
    {
        generate_piece_moves(board, side, pt, &mut moves);
    }
    generate_castles(board, side, &mut moves);

    moves
}

fn generate_pawn_moves(board: &Board, side: Color, moves: &mut Vec<Move>) {
    let pawn = Piece::new(side, PieceType::Pawn);
    let push_dir = Direction(side.pawn_step());
    let opponent_occ = board.side_occupancy(!side);

    for source in board.piece_bitboard(side, PieceType::Pawn) {
        let one_step = source + push_dir;
        if board.piece_at(one_step).is_empty() {
            if one_step.rank_from_top() == side.promotion_rank() {
                for promote_to in PieceType::PROMOTING {
                    moves.push(Move::promotion(source, one_step, pawn, promote_to));
                }
            } else {
                moves.push(Move::quiet(source, one_step, pawn));
                if source.rank_from_top() == side.pawn_start_rank() {
                    let two_step = one_step + push_dir;
                    if board.piece_at(two_step).is_empty() {
                        moves.push(Move::double_pawn_push(source, two_step, pawn));
                    }
                }
            }
        }

        let attacks = PAWN_ATTACKS[side.index()][source as usize];
        for target in attacks & opponent_occ {
            let captured = board.piece_at(target);
            if target.rank_from_top() == side.promotion_rank() {
                for promote_to in PieceType::PROMOTING {
                    moves.push(Move::promotion_capture(source, target, pawn, captured, promote_to));
                }
            } else {
                moves.push(Move::capture(source, target, pawn, captured));
            }
        }

        if let Some(ep) = board.en_passant_square {
            if attacks.contains(ep) {
                let captured_pawn = Piece::new(!side, PieceType::Pawn);
                moves.push(Move::en_passant(source, ep, pawn, captured_pawn));
            }
        }
    }
}

fn attacks_for(piece_type: PieceType, source: Square, occupancy: Bitboard) -> Bitboard {
    match piece_type {
        PieceType::Knight => KNIGHT_MOVES[source as usize],
        PieceType::King => KING_MOVES[source as usize],
        PieceType::Bishop => MAGIC.bishop_attacks(occupancy, source),
        PieceType::Rook => MAGIC.rook_attacks(occupancy, source),
        PieceType::Queen => MAGIC.queen_attacks(occupancy, source),
        PieceType::Pawn => unreachable!("pawns are generated separately"),
    }
}

fn generate_piece_moves(board: &Board, side: Color, piece_type: PieceType, moves: &mut Vec<Move>) {
    let piece = Piece::new(side, piece_type);
    let occ = board.occupancy();
    let own_occ = board.side_occupancy(side);

    for source in board.piece_bitboard(side, piece_type) {
        let targets = attacks_for(piece_type, source, occ) & !own_occ;
        for target in targets {
            if occ.contains(target) {
                moves.push(Move::capture(source, target, piece, board.piece_at(target)));
            } else {
                moves.push(Move::quiet(source, target, piece));
            }
        }
    }
}

#[derive(Clone, Copy)]
struct CastleGeometry {
    home: Square,
    kingside_end: Square,
    kingside_transit: Square,
    kingside_empty: Bitboard,
    queenside_end: Square,
    queenside_transit: Square,
    queenside_empty: Bitboard,
}

const WHITE_CASTLE: CastleGeometry = CastleGeometry {
    home: Square::E1,
    kingside_end: Square::G1,
    kingside_transit: Square::F1,
    kingside_empty: WHITE_KINGSIDE_EMPTY,
    queenside_end: Square::C1,
    queenside_transit: Square::D1,
    queenside_empty: WHITE_QUEENSIDE_EMPTY,
};

const BLACK_CASTLE: CastleGeometry = CastleGeometry {
    home: Square::E8,
    kingside_end: Square::G8,
    kingside_transit: Square::F8,
    kingside_empty: BLACK_KINGSIDE_EMPTY,
    queenside_end: Square::C8,
    queenside_transit: Square::D8,
    queenside_empty: BLACK_QUEENSIDE_EMPTY,
};

fn generate_castles(board: &Board, side: Color, moves: &mut Vec<Move>) {
    let geometry = match side {
        Color::White => WHITE_CASTLE,
        Color::Black => BLACK_CASTLE,
    };
    let king = Piece::new(side, PieceType::King);
    let occ = board.occupancy();
    let opponent = !side;

    if board.castle_rights.kingside(side)
        && (occ & geometry.kingside_empty).is_empty()
        && !board.is_square_attacked_by(geometry.home, opponent)
        && !board.is_square_attacked_by(geometry.kingside_transit, opponent)
        && !board.is_square_attacked_by(geometry.kingside_end, opponent)
    {
        moves.push(Move::castle_kingside(geometry.home, geometry.kingside_end, king));
    }

    if board.castle_rights.queenside(side)
        && (occ & geometry.queenside_empty).is_empty()
        && !board.is_square_attacked_by(geometry.home, opponent)
        && !board.is_square_attacked_by(geometry.queenside_transit, opponent)
        && !board.is_square_attacked_by(geometry.queenside_end, opponent)
    {
        moves.push(Move::castle_queenside(geometry.home, geometry.queenside_end, king));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(pseudo_legal_moves(&board).len(), 20);
    }

    #[test]
    fn double_push_and_promotion_are_generated() {
        let board = crate::fen::parse("8/P7/8/8/8/8/8/4K2k w - - 0 1").unwrap();
        let moves = pseudo_legal_moves(&board);
        assert!(moves.iter().any(|m| m.is_promotion() && m.end == Square::A8));
    }

    #[test]
    fn en_passant_is_generated_when_available() {
        let mut board = Board::new();
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        board.make_move(Move::double_pawn_push(Square::E2, Square::E4, pawn));
        let black_pawn = Piece::new(Color::Black, PieceType::Pawn);
        board.make_move(Move::quiet(Square::A7, Square::A6, black_pawn));
        board.make_move(Move::double_pawn_push(
            Square::E4,
            Square::E5,
            Piece::new(Color::White, PieceType::Pawn),
        ));
        board.make_move(Move::double_pawn_push(Square::D7, Square::D5, black_pawn));
        let moves = pseudo_legal_moves(&board);
        assert!(moves.iter().any(|m| m.is_en_passant() && m.end == Square::D6));
    }

    #[test]
    fn castling_requires_clear_and_unattacked_squares() {
        let board = crate::fen::parse("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = pseudo_legal_moves(&board);
        assert!(moves.iter().any(|m| m.is_castling() && m.end == Square::G1));
        assert!(moves.iter().any(|m| m.is_castling() && m.end == Square::C1));
    }
}
