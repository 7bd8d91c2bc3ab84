//! Collection generators: vectors, fixed-size arrays and 2D grids.

use crate::{data::*, gen::*};

/// A rectangular, row-major grid of values.
///
/// The dimensions are kept even when one of them is zero, so a `3 x 0`
/// grid still reports three (empty) rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells; `None` if the cell count does not
    /// match `rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        (rows.checked_mul(cols) == Some(cells.len())).then_some(Grid { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `row`, `col`, if it is inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Split the grid into owned rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        let mut cells = self.cells.into_iter();
        (0..self.rows)
            .map(|_| cells.by_ref().take(cols).collect())
            .collect()
    }
}

/// A length uniform in `[min, min + size]`, saturating at `usize::MAX`.
fn draw_length(size: Size, min: usize, seed: Seed) -> usize {
    let bound = (size.0 as u128 + 1).min(u64::MAX as u128) as u64;
    let (offset, _) = seed.next_bounded(bound);
    min.saturating_add(usize::try_from(offset).unwrap_or(usize::MAX))
}

/// Draw `count` values, each on its own substream.
fn draw_many<T>(element: &Gen<T>, count: usize, size: Size, seed: Seed) -> Vec<T> {
    seed.splits()
        .take(count)
        .map(|seed| element.generate(size, seed))
        .collect()
}

impl<T> Gen<Vec<T>>
where
    T: 'static,
{
    /// Generate vectors of exactly `length` elements.
    pub fn vec_of_length(length: usize, element: Gen<T>) -> Self {
        Gen::new(move |size, seed| draw_many(&element, length, size, seed))
    }

    /// Generate vectors whose length is uniform in `[0, size]`.
    pub fn vec_of(element: Gen<T>) -> Self {
        Gen::new(move |size, seed| {
            let (length_seed, elements_seed) = seed.split();
            let length = draw_length(size, 0, length_seed);
            draw_many(&element, length, size, elements_seed)
        })
    }

    /// Generate vectors whose length is uniform in `[1, size + 1]`.
    pub fn non_empty_vec_of(element: Gen<T>) -> Self {
        Gen::new(move |size, seed| {
            let (length_seed, elements_seed) = seed.split();
            let length = draw_length(size, 1, length_seed);
            draw_many(&element, length, size, elements_seed)
        })
    }
}

impl<T, const N: usize> Gen<[T; N]>
where
    T: 'static,
{
    /// Generate arrays of exactly `N` elements.
    pub fn array_of(element: Gen<T>) -> Self {
        Gen::new(move |size, seed| {
            let mut seed = seed;
            std::array::from_fn(|_| {
                let (rest, here) = seed.split();
                seed = rest;
                element.generate(size, here)
            })
        })
    }
}

impl<T> Gen<Grid<T>>
where
    T: 'static,
{
    /// Generate `rows x cols` grids.
    pub fn grid_of(rows: usize, cols: usize, element: Gen<T>) -> Self {
        Gen::new(move |size, seed| Grid {
            rows,
            cols,
            cells: draw_many(&element, rows * cols, size, seed),
        })
    }

    /// Generate grids whose dimensions are each uniform in `[0, isqrt(size)]`.
    pub fn grid_sized(element: Gen<T>) -> Self {
        Gen::new(move |size, seed| {
            let bound = isqrt(size.0) as u64 + 1;
            let (dims_seed, cells_seed) = seed.split();
            let (rows_seed, cols_seed) = dims_seed.split();
            let rows = rows_seed.next_bounded(bound).0 as usize;
            let cols = cols_seed.next_bounded(bound).0 as usize;
            Grid {
                rows,
                cols,
                cells: draw_many(&element, rows * cols, size, cells_seed),
            }
        })
    }
}

/// Largest `r` with `r * r <= n`.
fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |square| square <= n) {
        root += 1;
    }
    root
}
