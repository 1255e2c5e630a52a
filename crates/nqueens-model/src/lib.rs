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

//! # N-Queens Model
//!
//! Domain types shared by the N-Queens search engine and its drivers.
//! This crate defines the vocabulary of the problem without any search
//! logic of its own.
//!
//! ## Modules
//!
//! - `index`: Phantom-tagged, strongly typed row and column indices
//!   (`RowIndex`, `ColIndex`) that compile down to a transparent `usize`.
//! - `position`: A queen's square on the board and the attack predicate
//!   between two squares (shared row, column, or diagonal).
//! - `solution`: A complete, non-attacking placement of `n` queens,
//!   immutable once constructed.
//! - `board`: Caller-side validation of the board size precondition
//!   (`n >= 4`) for frontends that accept untrusted input.

pub mod board;
pub mod index;
pub mod position;
pub mod solution;

pub use board::{BoardSize, BoardSizeError, MIN_BOARD_SIZE};
pub use index::{ColIndex, RowIndex};
pub use position::Position;
pub use solution::Solution;
