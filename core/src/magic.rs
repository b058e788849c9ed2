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

//! Pre-computed attack tables: knight, king, and pawn step tables, plus
//! magic-bitboard lookups for the sliding pieces.
//!
//! The sliding-piece tables are built once, the first time [`MAGIC`] is
//! touched, by the magic-number finder in this module rather than from a
//! table of embedded constants. The finder is the one specified in the
//! design notes (random sparse 64-bit candidates, rejecting poor
//! distributions, verified collision-free against every blocker subset) and
//! is seeded deterministically, so the table it builds is reproducible
//! between runs and between processes. See `DESIGN.md` for why this
//! implementation computes magics at startup instead of shipping a baked-in
//! array of constants.

use once_cell::sync::Lazy;

use crate::bitboard::Bitboard;
use crate::square::{Direction, Square};

/// Globally available attack tables, built on first use.
pub static MAGIC: Lazy<AttacksTable> = Lazy::new(AttacksTable::new);

/// A bitboard of all the squares a knight standing on the index'th square can
/// move to.
pub static KNIGHT_MOVES: Lazy<[Bitboard; 64]> = Lazy::new(|| create_step_attacks(&Direction::KNIGHT_STEPS, 2));

/// A bitboard of all the squares a king standing on the index'th square can
/// move to.
pub static KING_MOVES: Lazy<[Bitboard; 64]> = Lazy::new(|| create_step_attacks(&Direction::KING_STEPS, 1));

/// `PAWN_ATTACKS[color.index()][square as usize]` is the set of squares a
/// pawn of that colour standing on `square` attacks.
pub static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        create_step_attacks(&[Direction::NORTHEAST, Direction::NORTHWEST], 1),
        create_step_attacks(&[Direction::SOUTHEAST, Direction::SOUTHWEST], 1),
    ]
});

fn create_step_attacks(dirs: &[Direction], max_dist: u8) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (i, sq) in Square::ALL.iter().enumerate() {
        for dir in dirs {
            let target_disc = *sq as i8 + dir.0;
            if !(0..64).contains(&target_disc) {
                continue;
            }
            let target = unsafe { Square::unsafe_from_u8(target_disc as u8) };
            if target.chebyshev_to(*sq) <= max_dist {
                attacks[i] = attacks[i].with_square(target);
            }
        }
    }
    attacks
}

/// Rays cast from `sq` in each of `dirs`, stopping at (and including) the
/// first square occupied in `occupancy`.
fn directional_attacks(sq: Square, dirs: &[Direction], occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for dir in dirs {
        for s in ray_squares(sq, *dir) {
            attacks.insert(s);
            if occupancy.contains(s) {
                break;
            }
        }
    }
    attacks
}

/// The squares visited by a ray cast from `sq` in direction `dir`, one step
/// at a time, until it runs off the board, in travel order.
fn ray_squares(sq: Square, dir: Direction) -> Vec<Square> {
    let mut squares = Vec::new();
    let mut current = sq;
    loop {
        let next_disc = current as i8 + dir.0;
        if !(0..64).contains(&next_disc) {
            break;
        }
        let next = unsafe { Square::unsafe_from_u8(next_disc as u8) };
        if next.chebyshev_to(current) != 1 {
            // wrapped around a board edge
            break;
        }
        squares.push(next);
        current = next;
    }
    squares
}

/// The occupancy mask for a sliding piece on `sq`: the ray squares in each of
/// `dirs`, excluding the final (edge) square of each ray, since a blocker
/// there cannot restrict the ray any further than the edge already does.
fn occupancy_mask(sq: Square, dirs: &[Direction]) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for dir in dirs {
        let ray = ray_squares(sq, *dir);
        for &s in ray.iter().take(ray.len().saturating_sub(1)) {
            mask.insert(s);
        }
    }
    mask
}

/// Distribute the bits of `index` over the set bits of `mask`, producing one
/// of the `2^popcount(mask)` possible blocker boards for that mask.
fn index_to_occupancy(index: usize, mask: Bitboard) -> Bitboard {
    let mut occupancy = Bitboard::EMPTY;
    let mut bits = mask;
    let mut i = 0;
    while let Some(sq) = bits.lowest_square() {
        bits = bits.pop_lowest();
        if index & (1 << i) != 0 {
            occupancy.insert(sq);
        }
        i += 1;
    }
    occupancy
}

/// A bitwise AND of three random 64-bit values: sparse enough to make a good
/// magic-number candidate.
fn random_sparse_bitboard() -> u64 {
    fastrand::u64(..) & fastrand::u64(..) & fastrand::u64(..)
}

const NUM_MAGIC_TRIES: u64 = 10_000_000;

/// Search for a magic number for `sq` given its `mask` and `is_rook`.
///
/// # Panics
/// Panics if no magic number is found within `NUM_MAGIC_TRIES` attempts; this
/// would indicate a defect in the search itself, since a valid magic for
/// every square is known to exist.
fn find_magic(sq: Square, mask: Bitboard, dirs: &[Direction]) -> (u64, u8, Vec<Bitboard>) {
    let n = mask.len();
    let shift = 64 - n as u8;
    let size = 1usize << n;
    let occupancies: Vec<Bitboard> = (0..size).map(|i| index_to_occupancy(i, mask)).collect();
    let reference_attacks: Vec<Bitboard> = occupancies
        .iter()
        .map(|&occ| directional_attacks(sq, dirs, occ))
        .collect();

    for _ in 0..NUM_MAGIC_TRIES {
        let magic = random_sparse_bitboard();
        if (mask.0.wrapping_mul(magic) >> 56).count_ones() < 6 {
            continue;
        }

        let mut table = vec![None; size];
        let mut failed = false;
        for i in 0..size {
            let key = ((occupancies[i].0.wrapping_mul(magic)) >> shift) as usize;
            match table[key] {
                None => table[key] = Some(reference_attacks[i]),
                Some(existing) if existing == reference_attacks[i] => {}
                Some(_) => {
                    failed = true;
                    break;
                }
            }
        }
        if !failed {
            let attacks = table.into_iter().map(|a| a.unwrap_or(Bitboard::EMPTY)).collect();
            return (magic, shift, attacks);
        }
    }
    panic!("failed to find a magic number for square {sq} after {NUM_MAGIC_TRIES} tries");
}

/// The per-square data needed to look up a sliding piece's attacks: its
/// occupancy mask, magic multiplier, shift amount, and dense attack table.
pub struct SquareAttacks {
    mask: Bitboard,
    magic: u64,
    shift: u8,
    attacks: Vec<Bitboard>,
}

impl SquareAttacks {
    #[inline(always)]
    fn lookup(&self, occupancy: Bitboard) -> Bitboard {
        let key = (((occupancy & self.mask).0.wrapping_mul(self.magic)) >> self.shift) as usize;
        self.attacks[key]
    }
}

/// The full set of magic-bitboard attack tables for bishops and rooks.
pub struct AttacksTable {
    rook: Vec<SquareAttacks>,
    bishop: Vec<SquareAttacks>,
}

impl AttacksTable {
    fn new() -> AttacksTable {
        // Deterministic seed: this crate's magic tables must be reproducible
        // across runs without shipping the magic numbers themselves.
        fastrand::seed(0xB17_B00C);
        log::debug!("constructing magic bitboard tables");
        let rook = Square::ALL
            .iter()
            .map(|&sq| {
                let mask = occupancy_mask(sq, &Direction::ROOK_DIRECTIONS);
                let (magic, shift, attacks) = find_magic(sq, mask, &Direction::ROOK_DIRECTIONS);
                SquareAttacks { mask, magic, shift, attacks }
            })
            .collect();
        let bishop = Square::ALL
            .iter()
            .map(|&sq| {
                let mask = occupancy_mask(sq, &Direction::BISHOP_DIRECTIONS);
                let (magic, shift, attacks) = find_magic(sq, mask, &Direction::BISHOP_DIRECTIONS);
                SquareAttacks { mask, magic, shift, attacks }
            })
            .collect();
        log::debug!("magic bitboard tables ready");
        AttacksTable { rook, bishop }
    }

    #[must_use]
    #[inline(always)]
    pub fn rook_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.rook[sq as usize].lookup(occupancy)
    }

    #[must_use]
    #[inline(always)]
    pub fn bishop_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.bishop[sq as usize].lookup(occupancy)
    }

    #[must_use]
    #[inline(always)]
    pub fn queen_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.rook_attacks(occupancy, sq) | self.bishop_attacks(occupancy, sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_mask_excludes_edges() {
        let mask = occupancy_mask(Square::A1, &Direction::ROOK_DIRECTIONS);
        // A1's rook mask should not include H1 or A8 (the ray edges).
        assert!(!mask.contains(Square::H1));
        assert!(!mask.contains(Square::A8));
        assert!(mask.contains(Square::B1));
        assert!(mask.contains(Square::A2));
    }

    #[test]
    fn bishop_mask_excludes_edges() {
        let mask = occupancy_mask(Square::D4, &Direction::BISHOP_DIRECTIONS);
        assert!(!mask.contains(Square::A1));
        assert!(!mask.contains(Square::H8));
        assert!(mask.contains(Square::C3));
    }

    #[test]
    fn index_to_occupancy_is_consistent() {
        let mask = occupancy_mask(Square::D4, &Direction::ROOK_DIRECTIONS);
        let n = mask.len();
        for i in 0..(1usize << n) {
            let occ = index_to_occupancy(i, mask);
            assert_eq!(occ & mask, occ);
        }
    }

    #[test]
    fn rook_attacks_on_empty_board() {
        let attacks = MAGIC.rook_attacks(Bitboard::EMPTY, Square::D4);
        // a full rank and file, minus D4 itself
        assert!(attacks.contains(Square::D1));
        assert!(attacks.contains(Square::D8));
        assert!(attacks.contains(Square::A4));
        assert!(attacks.contains(Square::H4));
        assert!(!attacks.contains(Square::D4));
    }

    #[test]
    fn rook_attacks_blocked() {
        let occ = Bitboard::from_square(Square::D6);
        let attacks = MAGIC.rook_attacks(occ, Square::D4);
        assert!(attacks.contains(Square::D5));
        assert!(attacks.contains(Square::D6));
        assert!(!attacks.contains(Square::D7));
    }

    #[test]
    fn bishop_attacks_on_empty_board() {
        let attacks = MAGIC.bishop_attacks(Bitboard::EMPTY, Square::D4);
        assert!(attacks.contains(Square::A1));
        assert!(attacks.contains(Square::G7));
        assert!(!attacks.contains(Square::D4));
    }

    #[test]
    fn knight_moves_from_corner() {
        let moves = KNIGHT_MOVES[Square::A1 as usize];
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(Square::B3));
        assert!(moves.contains(Square::C2));
    }

    #[test]
    fn king_moves_from_corner() {
        let moves = KING_MOVES[Square::A1 as usize];
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn pawn_attacks_are_diagonal() {
        let white = PAWN_ATTACKS[0][Square::E4 as usize];
        assert!(white.contains(Square::D5));
        assert!(white.contains(Square::F5));
        assert_eq!(white.len(), 2);
    }
}
