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

//! An interactive (and pipe-scriptable) driver over the library's core
//! operations. One command per line on stdin; `RUST_LOG` controls verbosity.
//!
//! Commands:
//!   fen <fen string>     set the current position
//!   print                print the board
//!   moves                list legal moves in the current position
//!   make <move text>     play a move, e.g. `e2e4` or `a7a8q`
//!   unmake                undo the last move made via `make`
//!   perft <depth>        count leaf nodes to `depth`
//!   divide <depth>       per-root-move perft breakdown
//!   search <depth>       run the fixed-depth search, print best move + score
//!   eval                 print the static evaluation
//!   quit                 exit

use std::io::{self, BufRead, Write};

use bitrook_core::{fen, movetext, perft, Board};
use bitrook_core::error::DriverError;
use bitrook_engine::{evaluate, search, SearchConfig};

fn main() {
    env_logger::init();
    let mut board = Board::new();
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush().ok();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::warn!("failed to read stdin: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            print!("> ");
            io::stdout().flush().ok();
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if let Err(e) = dispatch(&mut board, line) {
            log::warn!("{e}");
            println!("error: {e}");
        }
        print!("> ");
        io::stdout().flush().ok();
    }
}

fn dispatch(board: &mut Board, line: &str) -> Result<(), DriverError> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "fen" => {
            *board = fen::parse(rest)?;
            println!("{board}");
        }
        "print" => println!("{board}"),
        "moves" => {
            for m in perft::legal_moves(board) {
                println!("{m}");
            }
        }
        "make" => {
            let m = movetext::parse(board, rest)?;
            board.make_move(m);
            println!("{board}");
        }
        "unmake" => board.unmake_move(),
        "perft" => {
            let depth = parse_depth(rest)?;
            println!("{}", perft::perft(board, depth));
        }
        "divide" => {
            let depth = parse_depth(rest)?;
            let breakdown = perft::divide(board, depth)?;
            let mut total = 0;
            for (m, count) in breakdown {
                println!("{m}: {count}");
                total += count;
            }
            println!("total: {total}");
        }
        "search" => {
            let depth: u8 = rest.parse().unwrap_or(4);
            let config = SearchConfig::new(depth);
            let (best, score) = search(board, config);
            match best {
                Some(m) => println!("bestmove {m} score {score}"),
                None => println!("no legal moves, score {score}"),
            }
        }
        "eval" => println!("{}", evaluate(board)),
        other => println!("unknown command: {other}"),
    }
    Ok(())
}

fn parse_depth(text: &str) -> Result<u32, DriverError> {
    let depth: u32 = text.parse().unwrap_or(0);
    if depth == 0 {
        return Err(DriverError::ZeroDepth);
    }
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_subcommand_matches_ground_truth() {
        let mut board = Board::new();
        dispatch(&mut board, "perft 2").unwrap();
        assert_eq!(perft::perft(&mut board, 2), 400);
    }

    #[test]
    fn divide_rejects_depth_zero() {
        let mut board = Board::new();
        assert_eq!(dispatch(&mut board, "divide 0"), Err(DriverError::ZeroDepth));
    }

    #[test]
    fn make_then_unmake_round_trips_fen() {
        let mut board = Board::new();
        let before = fen::to_fen(&board);
        dispatch(&mut board, "make e2e4").unwrap();
        assert_ne!(fen::to_fen(&board), before);
        dispatch(&mut board, "unmake").unwrap();
        assert_eq!(fen::to_fen(&board), before);
    }
}
