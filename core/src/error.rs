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

//! Typed errors for the fallible boundaries of this crate: FEN parsing, move
//! text parsing, and driver argument validation.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A FEN string failed to parse.
pub enum FenError {
    /// The string did not split into the required six space-separated fields.
    WrongFieldCount { found: usize },
    /// The piece-placement field did not describe exactly 8 ranks of 8 files.
    BadPlacement(String),
    /// An unrecognised character appeared in the piece-placement field.
    UnknownPieceLetter(char),
    /// The side-to-move field was neither `w` nor `b`.
    BadSideToMove(String),
    /// The castling-rights field contained something other than a subset of
    /// `KQkq` or `-`.
    BadCastlingRights(String),
    /// The en-passant field was not `-` or a valid algebraic square.
    BadEnPassantSquare(String),
    /// The halfmove-clock or fullmove-number field did not parse as an
    /// integer.
    BadCounter { field: &'static str, value: String },
}

impl Display for FenError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 6 space-separated FEN fields, found {found}")
            }
            FenError::BadPlacement(s) => write!(f, "malformed piece placement: {s}"),
            FenError::UnknownPieceLetter(c) => write!(f, "unknown piece letter: {c}"),
            FenError::BadSideToMove(s) => write!(f, "side to move must be 'w' or 'b', got: {s}"),
            FenError::BadCastlingRights(s) => write!(f, "malformed castling rights: {s}"),
            FenError::BadEnPassantSquare(s) => write!(f, "malformed en-passant square: {s}"),
            FenError::BadCounter { field, value } => {
                write!(f, "malformed {field}: {value}")
            }
        }
    }
}

impl Error for FenError {}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Move text named a move that is not in the current legal move list.
pub struct IllegalMoveError {
    pub text: String,
}

impl Display for IllegalMoveError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "move '{}' is not legal in the current position", self.text)
    }
}

impl Error for IllegalMoveError {}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Move text could not even be decoded into a `(start, end, promotion)`
/// triple, independent of whether it would be legal.
pub enum MoveTextError {
    /// The text was not 4 or 5 characters, or its square portions did not
    /// parse as algebraic squares.
    Malformed(String),
    /// The 5th character, if present, was not one of `nbrq`.
    BadPromotionLetter(char),
    /// The decoded triple does not match any move in the current legal move
    /// list.
    NotLegal(IllegalMoveError),
}

impl Display for MoveTextError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MoveTextError::Malformed(s) => write!(f, "malformed move text: {s}"),
            MoveTextError::BadPromotionLetter(c) => {
                write!(f, "'{c}' is not a valid promotion letter")
            }
            MoveTextError::NotLegal(e) => write!(f, "{e}"),
        }
    }
}

impl Error for MoveTextError {}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A driver-level argument was invalid.
pub enum DriverError {
    /// `divide` (or `perft`) was called with a depth of 0, which has no
    /// meaningful per-move breakdown.
    ZeroDepth,
    Fen(FenError),
    MoveText(MoveTextError),
}

impl Display for DriverError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DriverError::ZeroDepth => write!(f, "depth must be at least 1"),
            DriverError::Fen(e) => write!(f, "{e}"),
            DriverError::MoveText(e) => write!(f, "{e}"),
        }
    }
}

impl Error for DriverError {}

impl From<FenError> for DriverError {
    fn from(e: FenError) -> DriverError {
        DriverError::Fen(e)
    }
}

impl From<MoveTextError> for DriverError {
    fn from(e: MoveTextError) -> DriverError {
        DriverError::MoveText(e)
    }
}
