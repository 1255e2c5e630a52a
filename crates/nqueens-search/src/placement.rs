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

use nqueens_model::Position;
use smallvec::SmallVec;

/// Boards up to this size keep their placement inline, off the heap.
const INLINE_QUEENS: usize = 16;

/// The live search path: queens already placed, one per row from row
/// `0` upward.
///
/// `Placement` is a LIFO stack mutated only by `push` (descend into the
/// next row) and `pop` (backtrack). It is owned by a single solve call;
/// `reset` clears entries while keeping allocated capacity so a solver
/// value can be reused across solves without reallocating.
#[derive(Clone, Debug, Default)]
pub struct Placement {
    entries: SmallVec<[Position; INLINE_QUEENS]>,
}

impl Placement {
    /// Creates a new, empty `Placement`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Creates a `Placement` preallocated for the given board size.
    #[inline]
    pub fn preallocated(board_size: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(board_size),
        }
    }

    /// Ensures the placement has capacity for the given board size.
    #[inline]
    pub fn ensure_capacity(&mut self, board_size: usize) {
        if self.entries.capacity() < board_size {
            self.entries.reserve(board_size - self.entries.len());
        }
    }

    /// Returns the number of queens currently placed.
    ///
    /// This equals the next row to fill: rows `0..len()` are occupied.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no queen has been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes a queen onto the placement.
    #[inline]
    pub fn push(&mut self, position: Position) {
        debug_assert_eq!(
            position.row().get(),
            self.entries.len(),
            "called `Placement::push` with a non-consecutive row: expected row {}, got {}",
            self.entries.len(),
            position.row().get()
        );
        self.entries.push(position);
    }

    /// Pops the most recently placed queen (the backtrack step).
    #[inline]
    pub fn pop(&mut self) -> Option<Position> {
        self.entries.pop()
    }

    /// Returns `true` if a queen already placed attacks `candidate`.
    ///
    /// This is the pruning test of the search: a candidate square is
    /// legal only if no queen in the current placement attacks it.
    #[inline]
    pub fn is_attacked(&self, candidate: Position) -> bool {
        self.entries.iter().any(|placed| placed.attacks(candidate))
    }

    /// Clears all placed queens, but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Returns a slice of all placed queens, ordered by row.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.entries
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placement(queens: {})", self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens_model::{ColIndex, RowIndex};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(RowIndex::new(row), ColIndex::new(col))
    }

    #[test]
    fn test_new_and_preallocated_basic_props() {
        let p = Placement::new();
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());
        assert_eq!(p.positions(), &[]);

        let p2 = Placement::preallocated(8);
        assert!(p2.is_empty());

        // Display sanity
        assert_eq!(format!("{}", p), "Placement(queens: 0)");
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut p = Placement::new();
        p.push(pos(0, 1));
        p.push(pos(1, 3));
        assert_eq!(p.len(), 2);

        assert_eq!(p.pop(), Some(pos(1, 3)));
        assert_eq!(p.pop(), Some(pos(0, 1)));
        assert_eq!(p.pop(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn test_pop_restores_pre_push_state() {
        let mut p = Placement::new();
        p.push(pos(0, 1));
        let before = p.positions().to_vec();

        p.push(pos(1, 3));
        p.pop();
        assert_eq!(p.positions(), &before[..]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `Placement::push` with a non-consecutive row")]
    fn test_push_rejects_row_gap_in_debug() {
        let mut p = Placement::new();
        p.push(pos(0, 0));
        p.push(pos(2, 1)); // row 1 skipped
    }

    #[test]
    fn test_is_attacked_covers_all_three_lines() {
        let mut p = Placement::new();
        p.push(pos(0, 2));

        // Column
        assert!(p.is_attacked(pos(1, 2)));
        // Falling diagonal
        assert!(p.is_attacked(pos(1, 3)));
        // Rising diagonal
        assert!(p.is_attacked(pos(1, 1)));
        // Safe square
        assert!(!p.is_attacked(pos(1, 0)));
    }

    #[test]
    fn test_is_attacked_checks_every_placed_queen() {
        // Prefix of a legal 4-queens placement.
        let mut p = Placement::new();
        p.push(pos(0, 1));
        p.push(pos(1, 3));

        // Attacked by the row-0 queen only (shared column).
        assert!(p.is_attacked(pos(2, 1)));
        // Attacked by the row-1 queen only (diagonal).
        assert!(p.is_attacked(pos(2, 2)));
        // The legal continuation.
        assert!(!p.is_attacked(pos(2, 0)));
    }

    #[test]
    fn test_empty_placement_attacks_nothing() {
        let p = Placement::new();
        assert!(!p.is_attacked(pos(0, 0)));
    }

    #[test]
    fn test_reset_clears_but_keeps_capacity() {
        let mut p = Placement::preallocated(32);
        let cap = p.entries.capacity();

        p.push(pos(0, 0));
        p.reset();

        assert!(p.is_empty());
        assert_eq!(p.entries.capacity(), cap);
    }

    #[test]
    fn test_ensure_capacity_grows_but_is_idempotent_when_large_enough() {
        let mut p = Placement::new();
        p.ensure_capacity(32);
        let cap = p.entries.capacity();
        assert!(cap >= 32);

        p.ensure_capacity(4);
        assert_eq!(p.entries.capacity(), cap);
    }
}
