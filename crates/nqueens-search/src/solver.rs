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

//! Backtracking solver for the N-Queens enumeration problem.
//!
//! This module implements a stateful search engine that enumerates all
//! placements of `n` non-attacking queens on an `n x n` board. The
//! `QueensSolver` walks the board row by row, trying each column in
//! increasing order, pruning any square attacked by a queen already
//! placed, and recording a copy of the placement whenever all `n` rows
//! are filled. The traversal is depth-first and deterministic, so
//! repeated solves yield identical solution sequences.
//!
//! The solver owns a reusable `Placement`; a `reset` at the start of
//! each solve keeps capacity while clearing per-run state, so one
//! solver value can serve repeated solves without reallocating. All
//! other per-run state (the solution pool and the statistics) is
//! created inside `solve` and threaded through the recursion, which
//! makes independent solves on separate threads safe by construction.

use crate::{
    placement::Placement, pool::SolutionPool, result::SolveOutcome, stats::SolverStatistics,
};
use log::debug;
use nqueens_model::{ColIndex, Position, RowIndex, Solution};
use std::time::Instant;

/// An exhaustive backtracking solver for the N-Queens problem.
///
/// The engine is total over its input domain: for any board size it
/// terminates with the complete set of solutions, empty where none
/// exist (sizes 2 and 3). Callers that accept untrusted input are
/// expected to enforce the `n >= 4` precondition with
/// `nqueens_model::BoardSize` before invoking the engine.
#[derive(Clone, Debug, Default)]
pub struct QueensSolver {
    placement: Placement,
}

impl QueensSolver {
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            placement: Placement::new(),
        }
    }

    /// Creates a new solver instance with storage preallocated for the
    /// given board size.
    ///
    /// # Note
    ///
    /// `solve` ensures sufficient capacity on its own; preallocating
    /// only moves the allocation cost to construction time.
    #[inline]
    pub fn preallocated(board_size: usize) -> Self {
        Self {
            placement: Placement::preallocated(board_size),
        }
    }

    /// Enumerates all solutions for an `n x n` board.
    ///
    /// Returns the solutions in discovery order (depth-first, by
    /// increasing row and by increasing column within each row)
    /// together with the statistics of the run.
    pub fn solve(&mut self, n: usize) -> SolveOutcome {
        let start = Instant::now();
        let mut pool = SolutionPool::new();
        let mut statistics = SolverStatistics::default();

        self.placement.ensure_capacity(n);
        self.placement.reset();
        self.descend(n, RowIndex::new(0), &mut pool, &mut statistics);

        debug_assert!(
            self.placement.is_empty(),
            "search left {} queens on the placement after exhausting the tree",
            self.placement.len()
        );

        statistics.set_total_time(start.elapsed());
        debug!(
            "n={}: {} solutions, {} nodes, {} prunings in {:.2?}",
            n,
            pool.len(),
            statistics.nodes_explored,
            statistics.prunings_attack,
            statistics.time_total
        );

        SolveOutcome::new(pool.into_solutions(), statistics)
    }

    /// Fills row `row` and recurses into the rows below it.
    ///
    /// On entry, rows `0..row` hold one queen each and none attack
    /// another. On return, the placement is restored to that state.
    fn descend(
        &mut self,
        n: usize,
        row: RowIndex,
        pool: &mut SolutionPool,
        statistics: &mut SolverStatistics,
    ) {
        statistics.on_node_explored();
        statistics.on_depth_update(row.get() as u64);

        // All rows filled: the placement is a complete, legal assignment.
        if row.get() == n {
            if pool.try_record(self.placement.positions()) {
                statistics.on_solution_found();
            } else {
                statistics.on_duplicate_rejected();
            }
            return;
        }

        for col in 0..n {
            let candidate = Position::new(row, ColIndex::new(col));
            if self.placement.is_attacked(candidate) {
                statistics.on_pruning_attack();
                continue;
            }

            self.placement.push(candidate);
            self.descend(n, row.next(), pool, statistics);
            self.placement.pop();
            statistics.on_backtrack();
        }
    }
}

/// Enumerates all solutions for an `n x n` board.
///
/// Convenience entry point over [`QueensSolver`] for callers that do
/// not need statistics or solver reuse.
#[inline]
pub fn solve(n: usize) -> Vec<Solution> {
    QueensSolver::preallocated(n).solve(n).into_solutions()
}
