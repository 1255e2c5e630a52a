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

use crate::index::{ColIndex, RowIndex};

/// A queen's square on the board, identified by its row and column.
///
/// Immutable once created. Two positions attack each other iff they
/// share a row, share a column, or lie on a common diagonal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    row: RowIndex,
    col: ColIndex,
}

impl Position {
    /// Creates a new `Position` at the given row and column.
    #[inline]
    pub const fn new(row: RowIndex, col: ColIndex) -> Self {
        Self { row, col }
    }

    /// Returns the row of this position.
    #[inline]
    pub const fn row(&self) -> RowIndex {
        self.row
    }

    /// Returns the column of this position.
    #[inline]
    pub const fn col(&self) -> ColIndex {
        self.col
    }

    /// Returns `true` if a queen on this square attacks a queen on
    /// `other` (or vice versa; the relation is symmetric).
    ///
    /// Queens attack along ranks, files, and diagonals. The diagonal
    /// test compares absolute row and column deltas, so it is exact for
    /// any pair of squares regardless of board size.
    #[inline]
    pub fn attacks(&self, other: Position) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.row.distance(other.row) == self.col.distance(other.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row.get(), self.col.get())
    }
}
