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

use crate::index::RowIndex;
use crate::position::Position;

/// A complete placement of `n` non-attacking queens on an `n x n` board.
///
/// Positions are ordered by row, one queen per row from row `0` upward.
/// Immutable once recorded; the search copies its live placement into a
/// `Solution` before backtracking mutates it further.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Solution {
    /// The queen positions, indexed by row (`positions[r].row() == r`).
    positions: Vec<Position>,
}

impl Solution {
    /// Constructs a new `Solution` from row-ordered positions.
    ///
    /// # Panics
    ///
    /// Panics if the positions are not exactly one per row in
    /// increasing row order starting at row `0`.
    pub fn new(positions: Vec<Position>) -> Self {
        for (row, position) in positions.iter().enumerate() {
            assert_eq!(
                position.row(),
                RowIndex::new(row),
                "called Solution::new with out-of-order positions: index {} holds {:?}",
                row,
                position
            );
        }

        Self { positions }
    }

    /// Returns the number of queens (equal to the board size).
    #[inline]
    pub fn num_queens(&self) -> usize {
        self.positions.len()
    }

    /// Returns the queen position in the given row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn position_in_row(&self, row: RowIndex) -> Position {
        let index = row.get();
        debug_assert!(
            index < self.num_queens(),
            "called `Solution::position_in_row` with row out of bounds: the len is {} but the row is {}",
            self.num_queens(),
            index
        );

        self.positions[index]
    }

    /// Returns `true` if this solution contains the given position.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        let index = position.row().get();
        match self.positions.get(index) {
            Some(p) => *p == position,
            None => false,
        }
    }

    /// Returns a slice of all queen positions, ordered by row.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns an iterator over all queen positions, ordered by row.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl std::fmt::Display for Solution {
    /// Renders the solution as an ordered sequence of `(row, column)`
    /// pairs, e.g. `[(0, 1), (1, 3), (2, 0), (3, 2)]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ColIndex;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(RowIndex::new(row), ColIndex::new(col))
    }

    #[test]
    fn test_new_and_basic_accessors() {
        // One of the two classic 4-queens solutions.
        let positions = vec![pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)];
        let sol = Solution::new(positions.clone());

        assert_eq!(sol.num_queens(), 4);
        assert_eq!(sol.positions(), &positions[..]);
        assert_eq!(sol.position_in_row(RowIndex::new(0)), pos(0, 1));
        assert_eq!(sol.position_in_row(RowIndex::new(3)), pos(3, 2));
    }

    #[test]
    #[should_panic(expected = "called Solution::new with out-of-order positions")]
    fn test_new_panics_on_out_of_order_rows() {
        // Rows 1 and 0 swapped.
        let _ = Solution::new(vec![pos(1, 3), pos(0, 1)]);
    }

    #[test]
    #[should_panic(expected = "called Solution::new with out-of-order positions")]
    fn test_new_panics_on_missing_row() {
        // Row 1 skipped.
        let _ = Solution::new(vec![pos(0, 1), pos(2, 0)]);
    }

    #[test]
    fn test_empty_solution_is_valid() {
        // The zero-size board has exactly one (empty) placement.
        let sol = Solution::new(Vec::new());
        assert_eq!(sol.num_queens(), 0);
        assert_eq!(sol.positions(), &[]);
    }

    #[test]
    fn test_contains() {
        let sol = Solution::new(vec![pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)]);

        assert!(sol.contains(pos(0, 1)));
        assert!(sol.contains(pos(3, 2)));

        // Same row, different column.
        assert!(!sol.contains(pos(0, 2)));
        // Row outside the board.
        assert!(!sol.contains(pos(4, 0)));
    }

    #[test]
    fn test_iter_yields_row_order() {
        let sol = Solution::new(vec![pos(0, 2), pos(1, 0), pos(2, 3), pos(3, 1)]);
        let rows = sol.iter().map(|p| p.row().get()).collect::<Vec<_>>();
        assert_eq!(rows, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_display_formatting() {
        let sol = Solution::new(vec![pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)]);
        assert_eq!(format!("{}", sol), "[(0, 1), (1, 3), (2, 0), (3, 2)]");

        let empty = Solution::new(Vec::new());
        assert_eq!(format!("{}", empty), "[]");
    }
}
