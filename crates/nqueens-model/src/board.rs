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

use thiserror::Error;

/// The smallest board size accepted at the user-facing boundary.
///
/// Boards of size 2 and 3 admit no solution, and sizes 0 and 1 are
/// degenerate; frontends reject anything below 4 before the search
/// engine is invoked. The engine itself stays total for any size and
/// simply returns an empty set where no placement exists.
pub const MIN_BOARD_SIZE: usize = 4;

/// Error returned when a requested board size fails the `n >= 4`
/// precondition.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardSizeError {
    #[error("board size must be at least {MIN_BOARD_SIZE}, got {0}")]
    TooSmall(usize),
}

/// A validated board size: the side length of the board and the number
/// of queens to place.
///
/// Constructing a `BoardSize` proves `n >= 4` once, so downstream code
/// can take the precondition for granted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validates and wraps a board size.
    #[inline]
    pub fn new(n: usize) -> Result<Self, BoardSizeError> {
        if n < MIN_BOARD_SIZE {
            return Err(BoardSizeError::TooSmall(n));
        }
        Ok(Self(n))
    }

    /// Returns the underlying size.
    #[inline]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimum_and_above() {
        assert_eq!(BoardSize::new(4).unwrap().get(), 4);
        assert_eq!(BoardSize::new(8).unwrap().get(), 8);
        assert_eq!(BoardSize::new(100).unwrap().get(), 100);
    }

    #[test]
    fn test_rejects_below_minimum() {
        for n in 0..MIN_BOARD_SIZE {
            assert_eq!(BoardSize::new(n), Err(BoardSizeError::TooSmall(n)));
        }
    }

    #[test]
    fn test_error_message_names_the_bound() {
        let err = BoardSize::new(3).unwrap_err();
        assert_eq!(format!("{}", err), "board size must be at least 4, got 3");
    }

    #[test]
    fn test_conversions() {
        let size = BoardSize::try_from(6).unwrap();
        assert_eq!(usize::from(size), 6);
        assert!(BoardSize::try_from(2).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BoardSize::new(8).unwrap()), "8");
    }
}
