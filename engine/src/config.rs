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

//! Search configuration. There is exactly one knob: how deep to search,
//! since move ordering, quiescence, and time management are all non-goals.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(depth: u8) -> SearchConfig {
        SearchConfig { depth }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::new(4)
    }
}
