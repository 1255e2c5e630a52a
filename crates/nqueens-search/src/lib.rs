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

//! # N-Queens Search Engine
//!
//! Exhaustive enumeration of all placements of `n` non-attacking queens
//! on an `n x n` board, using row-by-row backtracking with attack
//! pruning. The engine is deterministic (depth-first, by increasing row
//! and by increasing column within each row), single-threaded, and
//! holds no state across solve calls, so independent solves may run on
//! separate threads without coordination.
//!
//! ## Modules
//!
//! - `placement`: The live search path, a reusable push/pop stack of
//!   queen positions with an attack scan against the placed prefix.
//! - `pool`: Discovery-ordered solution accumulator with a
//!   subset-containment duplicate check.
//! - `solver`: The backtracking engine (`QueensSolver`) and the
//!   convenience entry point `solve`.
//! - `stats`: Counters collected during a solve (nodes, backtracks,
//!   prunings, solutions, timing).
//! - `result`: `SolveOutcome`, bundling the ordered solutions with the
//!   statistics of the run that produced them.

pub mod placement;
pub mod pool;
pub mod result;
pub mod solver;
pub mod stats;

pub use placement::Placement;
pub use pool::SolutionPool;
pub use result::SolveOutcome;
pub use solver::{solve, QueensSolver};
pub use stats::SolverStatistics;
