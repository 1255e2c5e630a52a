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

//! # Strongly Typed Board Indices (Zero-Cost)
//!
//! Phantom-typed wrappers around `usize` to prevent mixing row and
//! column coordinates. `BoardIndex<T>` carries a tag type
//! `T: BoardIndexTag` that encodes intent at the type level, while
//! compiling down to a transparent `usize` (no runtime overhead).
//!
//! Rows and columns share the same value range `[0, n)`, which makes an
//! accidental swap both easy to write and invisible at runtime: the
//! board is square, so a transposed coordinate still indexes a valid
//! square. The tag types make such a swap a compile error instead.

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait BoardIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed board index associated with a specific tag type `T`.
///
/// Wraps a `usize` and uses a phantom type parameter to keep row and
/// column index spaces apart.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> BoardIndex<T> {
    /// Creates a new `BoardIndex` with the given `usize` value.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` value.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns the index following this one.
    ///
    /// Used by the search to descend from one row to the next.
    #[inline(always)]
    pub const fn next(&self) -> Self {
        Self::new(self.index + 1)
    }

    /// Returns the absolute distance to another index of the same space.
    #[inline(always)]
    pub const fn distance(&self, other: Self) -> usize {
        self.index.abs_diff(other.index)
    }
}

impl<T> std::fmt::Debug for BoardIndex<T>
where
    T: BoardIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for BoardIndex<T>
where
    T: BoardIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for BoardIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<BoardIndex<T>> for usize {
    fn from(typed_index: BoardIndex<T>) -> Self {
        typed_index.index
    }
}

/// A tag type for row indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RowIndexTag;

impl BoardIndexTag for RowIndexTag {
    const NAME: &'static str = "RowIndex";
}

/// A typed index for board rows.
pub type RowIndex = BoardIndex<RowIndexTag>;

/// A tag type for column indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ColIndexTag;

impl BoardIndexTag for ColIndexTag {
    const NAME: &'static str = "ColIndex";
}

/// A typed index for board columns.
pub type ColIndex = BoardIndex<ColIndexTag>;
