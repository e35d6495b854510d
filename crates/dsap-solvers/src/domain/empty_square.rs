//! Largest empty square
//!
//! For every cell `(x, y)` let `S(x, y)` be the side length of the largest
//! all-empty square whose bottom-right corner is that cell:
//!
//! - `S = 0` if the cell is occupied
//! - `S = 1` if the cell is empty and lies on the top row or left column
//! - otherwise `S = 1 + min(S(x-1, y-1), S(x-1, y), S(x, y-1))`
//!
//! The answer is the maximum `S` over the whole matrix.

use crate::domain::strategy::Strategy;
use log::trace;

/// Square grid of cells, `true` = occupied
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    cells: Vec<bool>,
}

impl Matrix {
    /// Build from row-major cells
    ///
    /// Returns `None` unless `cells.len() == size * size`.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == size * size).then_some(Self { size, cells })
    }

    /// Build from cells whose count the caller has already verified
    pub(crate) fn from_checked_cells(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Build from rows; every row must be as long as there are rows
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self { size, cells })
    }

    /// Matrix with every cell set to `occupied`
    pub fn filled(size: usize, occupied: bool) -> Self {
        Self {
            size,
            cells: vec![occupied; size * size],
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at column `x`, row `y` is occupied
    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.size + x]
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

/// Side length of the largest all-empty square, using `strategy`
pub fn largest_empty_square(matrix: &Matrix, strategy: Strategy) -> usize {
    match strategy {
        Strategy::Recursive => largest_empty_square_recursive(matrix),
        Strategy::Memoized => largest_empty_square_memoized(matrix),
        Strategy::Iterative => largest_empty_square_iterative(matrix),
    }
}

/// Naive recursion: recomputes `S` from scratch for every cell
///
/// Exponential in the side length of empty regions; only usable on small
/// matrices.
pub fn largest_empty_square_recursive(matrix: &Matrix) -> usize {
    cells(matrix.size())
        .map(|(x, y)| square_at(matrix, x, y))
        .max()
        .unwrap_or(0)
}

fn square_at(matrix: &Matrix, x: usize, y: usize) -> usize {
    if matrix.is_occupied(x, y) {
        0
    } else if x == 0 || y == 0 {
        1
    } else {
        1 + square_at(matrix, x - 1, y - 1)
            .min(square_at(matrix, x - 1, y))
            .min(square_at(matrix, x, y - 1))
    }
}

/// Top-down recursion with a cache keyed by cell
pub fn largest_empty_square_memoized(matrix: &Matrix) -> usize {
    let mut memo = vec![None; matrix.size() * matrix.size()];
    let largest = cells(matrix.size())
        .map(|(x, y)| square_at_memoized(matrix, x, y, &mut memo))
        .max()
        .unwrap_or(0);
    trace!(
        "memoized empty square: {} cached cells",
        memo.iter().filter(|m| m.is_some()).count()
    );
    largest
}

fn square_at_memoized(matrix: &Matrix, x: usize, y: usize, memo: &mut [Option<usize>]) -> usize {
    if matrix.is_occupied(x, y) {
        return 0;
    }
    if x == 0 || y == 0 {
        return 1;
    }

    let index = y * matrix.size() + x;
    if let Some(side) = memo[index] {
        return side;
    }

    let side = 1 + square_at_memoized(matrix, x - 1, y - 1, memo)
        .min(square_at_memoized(matrix, x - 1, y, memo))
        .min(square_at_memoized(matrix, x, y - 1, memo));
    memo[index] = Some(side);
    side
}

/// Bottom-up fill in row-major order
///
/// Only the previous row is kept alive.
pub fn largest_empty_square_iterative(matrix: &Matrix) -> usize {
    let size = matrix.size();
    let mut previous = vec![0usize; size];
    let mut current = vec![0usize; size];
    let mut largest = 0;

    for y in 0..size {
        for x in 0..size {
            current[x] = if matrix.is_occupied(x, y) {
                0
            } else if x == 0 || y == 0 {
                1
            } else {
                1 + previous[x - 1].min(previous[x]).min(current[x - 1])
            };
            largest = largest.max(current[x]);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    largest
}

/// Row-major `(x, y)` coordinates of a `size × size` grid
fn cells(size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
}
