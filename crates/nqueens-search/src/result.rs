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

use crate::stats::SolverStatistics;
use nqueens_model::Solution;

/// Result of the solver after the search tree has been exhausted.
///
/// The search is total: for any board size it terminates with the full,
/// possibly empty, set of solutions. There is no failure or abort
/// variant to distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    solutions: Vec<Solution>,
    statistics: SolverStatistics,
}

impl SolveOutcome {
    #[inline]
    pub fn new(solutions: Vec<Solution>, statistics: SolverStatistics) -> Self {
        Self {
            solutions,
            statistics,
        }
    }

    /// Returns the solutions in discovery order.
    #[inline]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Returns the number of solutions found.
    #[inline]
    pub fn num_solutions(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if the board admits no solution.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Returns the statistics of the run that produced this outcome.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Consumes the outcome, yielding the solutions in discovery order.
    #[inline]
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolveOutcome(solutions: {})", self.solutions.len())
    }
}
