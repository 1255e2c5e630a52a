// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command line driver for the N-Queens enumeration engine.
//!
//! Reads one integer argument, validates it against the `n >= 4`
//! precondition before the engine is invoked, and prints every solution
//! as an ordered sequence of `(row, column)` pairs, one solution per
//! line, in discovery order. Invalid input (wrong argument count,
//! non-numeric values, boards below size 4) is rejected with a
//! diagnostic and a non-zero exit status; the engine is never reached.

use anyhow::Result;
use clap::Parser;
use log::info;
use nqueens_model::BoardSize;
use nqueens_search::QueensSolver;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "nqueens",
    about = "Enumerate all placements of N non-attacking queens on an NxN board"
)]
struct Args {
    /// Board size and number of queens (at least 4).
    #[arg(value_parser = parse_board_size)]
    n: BoardSize,

    /// Print search statistics to stderr after the solutions.
    #[arg(long)]
    stats: bool,
}

/// Parses and validates the board size argument.
fn parse_board_size(raw: &str) -> Result<BoardSize, String> {
    let n = raw
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    BoardSize::new(n).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let n = args.n.get();
    info!("enumerating solutions for n={}", n);

    let outcome = QueensSolver::preallocated(n).solve(n);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for solution in outcome.solutions() {
        writeln!(out, "{}", solution)?;
    }
    out.flush()?;

    if args.stats {
        eprint!("{}", outcome.statistics());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_size_accepts_valid_input() {
        assert_eq!(parse_board_size("4").unwrap().get(), 4);
        assert_eq!(parse_board_size("12").unwrap().get(), 12);
    }

    #[test]
    fn test_parse_board_size_rejects_non_numeric_input() {
        let err = parse_board_size("four").unwrap_err();
        assert_eq!(err, "'four' is not a number");

        assert!(parse_board_size("").is_err());
        assert!(parse_board_size("4.5").is_err());
        assert!(parse_board_size("-4").is_err());
    }

    #[test]
    fn test_parse_board_size_rejects_small_boards() {
        let err = parse_board_size("3").unwrap_err();
        assert_eq!(err, "board size must be at least 4, got 3");
        assert!(parse_board_size("0").is_err());
    }

    #[test]
    fn test_args_require_exactly_one_board_size() {
        assert!(Args::try_parse_from(["nqueens"]).is_err());
        assert!(Args::try_parse_from(["nqueens", "4", "5"]).is_err());

        let args = Args::try_parse_from(["nqueens", "8", "--stats"]).unwrap();
        assert_eq!(args.n.get(), 8);
        assert!(args.stats);
    }
}
