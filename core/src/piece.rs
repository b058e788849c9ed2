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

//! Packed piece codes.
//!
//! A piece is a 5-bit code: the low three bits are a [`PieceType`] (1..=6),
//! the high two bits are a colour mask (`WHITE` = 0b01000, `BLACK` =
//! 0b10000). Colour and type are disjoint, so `color | piece_type` composes a
//! piece code and `code & COLOR_MASK` / `code & TYPE_MASK` decomposes one.
//! The composed code doubles as an index into [`crate::board::Board`]'s
//! per-piece bitboard array.

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::{BitOr, Not};

/// Mask selecting the colour bits of a piece code.
pub const COLOR_MASK: u8 = 0b1_1000;
/// Mask selecting the type bits of a piece code.
pub const TYPE_MASK: u8 = 0b0_0111;
/// The piece code used for an empty square.
pub const EMPTY: u8 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
/// Which side a piece or occupancy bitboard belongs to.
pub enum Color {
    White = 0b0_1000,
    Black = 0b1_0000,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[must_use]
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    #[inline(always)]
    /// The square-index delta of one pawn step forward for this colour.
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -8,
            Color::Black => 8,
        }
    }

    #[must_use]
    #[inline(always)]
    /// `rank_from_top` of this colour's pawn starting rank.
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[must_use]
    #[inline(always)]
    /// `rank_from_top` of this colour's promotion rank.
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[must_use]
    #[inline(always)]
    /// Dense 0/1 index for this colour, used by tables sized `[T; 2]` (e.g.
    /// [`crate::magic::PAWN_ATTACKS`]) where the packed piece-code value
    /// would be out of range.
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;
    #[inline(always)]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", if *self == Color::White { "white" } else { "black" })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
/// The six types of chess piece, valued as the low three bits of a piece code.
pub enum PieceType {
    Pawn = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// The four promotable types, ordered by the low two bits of a promotion
    /// move flag: 00 -> knight, 01 -> bishop, 10 -> rook, 11 -> queen.
    pub const PROMOTING: [PieceType; 4] =
        [PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen];

    #[must_use]
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    /// The letter used for this type in FEN / algebraic text, uppercase.
    pub const fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    #[must_use]
    pub const fn from_promotion_bits(bits: u8) -> PieceType {
        match bits & 0b11 {
            0b00 => PieceType::Knight,
            0b01 => PieceType::Bishop,
            0b10 => PieceType::Rook,
            _ => PieceType::Queen,
        }
    }

    #[must_use]
    /// The two-bit code used to encode this type in a promotion move flag.
    /// Only meaningful for promotable types.
    pub const fn promotion_bits(self) -> u8 {
        match self {
            PieceType::Knight => 0b00,
            PieceType::Bishop => 0b01,
            PieceType::Rook => 0b10,
            _ => 0b11,
        }
    }
}

impl TryFrom<u8> for PieceType {
    type Error = ();
    fn try_from(v: u8) -> Result<PieceType, ()> {
        match v & TYPE_MASK {
            1 => Ok(PieceType::Pawn),
            2 => Ok(PieceType::Bishop),
            3 => Ok(PieceType::Knight),
            4 => Ok(PieceType::Rook),
            5 => Ok(PieceType::Queen),
            6 => Ok(PieceType::King),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// A coloured piece, stored as the packed 5-bit code described in the module
/// documentation. `Piece(0)` represents an empty square.
pub struct Piece(pub u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);

    #[must_use]
    #[inline(always)]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece(color.code() | piece_type.code())
    }

    #[must_use]
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    #[inline(always)]
    pub fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            x if x == Color::White.code() => Some(Color::White),
            x if x == Color::Black.code() => Some(Color::Black),
            _ => None,
        }
    }

    #[must_use]
    #[inline(always)]
    pub fn piece_type(self) -> Option<PieceType> {
        PieceType::try_from(self.0).ok()
    }

    #[must_use]
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[must_use]
    /// The piece's FEN letter: uppercase for white, lowercase for black.
    /// Returns `None` for an empty square.
    pub fn letter(self) -> Option<char> {
        let pt = self.piece_type()?;
        let c = pt.letter();
        match self.color()? {
            Color::White => Some(c),
            Color::Black => Some(c.to_ascii_lowercase()),
        }
    }
}

impl BitOr<PieceType> for Color {
    type Output = Piece;
    #[inline(always)]
    fn bitor(self, rhs: PieceType) -> Piece {
        Piece::new(self, rhs)
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.letter() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "."),
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Piece({:#07b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_spec() {
        assert_eq!(Color::White.code(), 0b0_1000);
        assert_eq!(Color::Black.code(), 0b1_0000);
        assert_eq!(PieceType::Pawn.code(), 1);
        assert_eq!(PieceType::King.code(), 6);
    }

    #[test]
    fn compose_and_decompose() {
        let p = Piece::new(Color::Black, PieceType::Knight);
        assert_eq!(p.0, 0b1_0011);
        assert_eq!(p.color(), Some(Color::Black));
        assert_eq!(p.piece_type(), Some(PieceType::Knight));
    }

    #[test]
    fn empty_has_no_color_or_type() {
        assert!(Piece::EMPTY.color().is_none());
        assert!(Piece::EMPTY.piece_type().is_none());
    }

    #[test]
    fn promotion_bits_roundtrip() {
        for pt in PieceType::PROMOTING {
            assert_eq!(PieceType::from_promotion_bits(pt.promotion_bits()), pt);
        }
    }

    #[test]
    fn letters() {
        assert_eq!(Piece::new(Color::White, PieceType::Queen).letter(), Some('Q'));
        assert_eq!(Piece::new(Color::Black, PieceType::Queen).letter(), Some('q'));
    }
}
