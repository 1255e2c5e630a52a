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

//! # Solution Pool
//!
//! Accumulates solutions in discovery order and guards against
//! duplicates with a subset-containment check: a completed placement is
//! rejected if some already-recorded solution contains every one of its
//! positions.
//!
//! Under the engine's strict row-ordered traversal every completed
//! placement holds exactly one queen per row, so two distinct complete
//! placements can never be subsets of one another and the check cannot
//! reject a genuinely new solution. The check is kept because it is the
//! observable dedup contract of the engine: a traversal that assigned
//! rows out of order would rely on it. It does not perform symmetry
//! reduction; rotations and reflections of a solution are distinct
//! entries.

use nqueens_model::{Position, Solution};
use rustc_hash::FxHashSet;

/// Discovery-ordered accumulator for the solutions of one solve call.
#[derive(Clone, Debug, Default)]
pub struct SolutionPool {
    /// Recorded solutions, in the order the search found them.
    solutions: Vec<Solution>,
    /// Position sets parallel to `solutions`, for the containment probe.
    position_sets: Vec<FxHashSet<Position>>,
}

impl SolutionPool {
    /// Creates a new, empty `SolutionPool`.
    #[inline]
    pub fn new() -> Self {
        Self {
            solutions: Vec::new(),
            position_sets: Vec::new(),
        }
    }

    /// Returns the number of recorded solutions.
    #[inline]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if no solution has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Returns `true` if an already-recorded solution contains every
    /// position of `candidate`.
    #[inline]
    pub fn is_subsumed(&self, candidate: &[Position]) -> bool {
        self.position_sets
            .iter()
            .any(|set| candidate.iter().all(|position| set.contains(position)))
    }

    /// Records a completed placement as a new solution, unless it is
    /// subsumed by one recorded earlier.
    ///
    /// Returns `true` if the solution was recorded. The positions are
    /// copied; the caller keeps mutating its live placement afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `candidate` survives the subsumption check but is not
    /// row-ordered (see `Solution::new`).
    pub fn try_record(&mut self, candidate: &[Position]) -> bool {
        if self.is_subsumed(candidate) {
            return false;
        }

        self.position_sets
            .push(candidate.iter().copied().collect());
        self.solutions.push(Solution::new(candidate.to_vec()));
        true
    }

    /// Returns the recorded solutions in discovery order.
    #[inline]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Consumes the pool, yielding the solutions in discovery order.
    #[inline]
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

impl std::fmt::Display for SolutionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolutionPool(solutions: {})", self.solutions.len())
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
    fn test_records_distinct_solutions_in_order() {
        let mut pool = SolutionPool::new();

        // The two 4-queens solutions, in discovery order.
        let first = [pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)];
        let second = [pos(0, 2), pos(1, 0), pos(2, 3), pos(3, 1)];

        assert!(pool.try_record(&first));
        assert!(pool.try_record(&second));

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.solutions()[0].positions(), &first[..]);
        assert_eq!(pool.solutions()[1].positions(), &second[..]);
    }

    #[test]
    fn test_rejects_exact_duplicate() {
        let mut pool = SolutionPool::new();
        let placement = [pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)];

        assert!(pool.try_record(&placement));
        assert!(!pool.try_record(&placement));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_rejects_subset_of_recorded_solution() {
        // The check is containment, not equality: a shorter candidate
        // whose positions all appear in a recorded solution is rejected.
        // Only a traversal assigning rows out of order could produce
        // such a candidate.
        let mut pool = SolutionPool::new();
        assert!(pool.try_record(&[pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)]));

        assert!(pool.is_subsumed(&[pos(0, 1), pos(2, 0)]));
        assert!(!pool.try_record(&[pos(0, 1), pos(1, 3)]));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_accepts_overlapping_but_not_contained_candidate() {
        let mut pool = SolutionPool::new();
        assert!(pool.try_record(&[pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)]));

        // Shares three positions with the recorded solution but differs
        // in row 3, so it is not subsumed.
        let other = [pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 0)];
        assert!(!pool.is_subsumed(&other));
        assert!(pool.try_record(&other));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_empty_pool_subsumes_nothing() {
        let pool = SolutionPool::new();
        assert!(!pool.is_subsumed(&[pos(0, 0)]));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_into_solutions_preserves_order() {
        let mut pool = SolutionPool::new();
        let first = [pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)];
        let second = [pos(0, 2), pos(1, 0), pos(2, 3), pos(3, 1)];
        pool.try_record(&first);
        pool.try_record(&second);

        let solutions = pool.into_solutions();
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].positions(), &first[..]);
        assert_eq!(solutions[1].positions(), &second[..]);
    }

    #[test]
    fn test_display_includes_count() {
        let mut pool = SolutionPool::new();
        assert_eq!(format!("{}", pool), "SolutionPool(solutions: 0)");
        pool.try_record(&[pos(0, 1), pos(1, 3), pos(2, 0), pos(3, 2)]);
        assert_eq!(format!("{}", pool), "SolutionPool(solutions: 1)");
    }
}
