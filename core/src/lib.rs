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

//! Bitboard position representation, magic-bitboard move generation, and a
//! perft driver.
//!
//! A [`Board`] owns position state; [`movegen`] enumerates pseudo-legal
//! moves against it; [`perft`] filters those to legal moves and counts
//! leaves; [`fen`] and [`movetext`] translate to and from text at the
//! crate's edges.

pub mod bitboard;
pub mod board;
pub mod castling;
pub mod error;
pub mod fen;
pub mod magic;
pub mod movegen;
pub mod movetext;
pub mod moves;
pub mod perft;
pub mod piece;
pub mod square;

pub use bitboard::Bitboard;
pub use board::Board;
pub use castling::CastleRights;
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use square::{Direction, Square};
