//! The toroidal sparse matrix that backs the dancing links search.
//!
//! Every node lives in one flat arena addressed by `usize` index:
//! indices `0..num_cols` are the column headers, `num_cols` is the root
//! of the active-column ring, and data cells follow in input order. All
//! cross-references are indices into parallel arrays; nothing is
//! allocated or freed while links dance.

use crate::error::Error;

/// A fully linked exact-cover matrix.
///
/// Built once from a sorted list of `(row, column)` occupancy positions;
/// afterwards the link fields only ever mutate through the matched
/// cover/uncover splice pair, which restores them exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    left: Vec<usize>,
    right: Vec<usize>,
    up: Vec<usize>,
    down: Vec<usize>,
    /// Owning column header of each node; headers point at themselves.
    header: Vec<usize>,
    /// Live cell count per column header.
    size: Vec<usize>,
    /// Row number each cell came from; headers carry `num_rows`.
    row_tag: Vec<usize>,
    covered: Vec<bool>,
    num_cols: usize,
    num_rows: usize,
}

impl Grid {
    /// Build the matrix for `positions`, a sequence of `(row, column)`
    /// pairs naming the 1-cells of the underlying 0/1 matrix.
    ///
    /// `positions` must be sorted by row, then column, with no
    /// duplicates, and every index must lie inside the declared extents.
    pub fn new(
        num_cols: usize,
        num_rows: usize,
        positions: &[(usize, usize)],
    ) -> Result<Self, Error> {
        let head_len = num_cols + 1;
        let dim = head_len + positions.len();

        let mut grid = Grid {
            left: vec![0; dim],
            right: vec![0; dim],
            up: vec![0; dim],
            down: vec![0; dim],
            header: vec![0; dim],
            size: vec![0; num_cols],
            row_tag: vec![num_rows; dim],
            covered: vec![false; num_cols],
            num_cols,
            num_rows,
        };

        // Headers are vertical self-loops; the root ring holds every
        // column in ascending order, with the root at index num_cols.
        for c in 0..head_len {
            grid.up[c] = c;
            grid.down[c] = c;
            grid.header[c] = c;
            grid.right[c] = (c + 1) % head_len;
            grid.left[c] = (c + head_len - 1) % head_len;
        }

        let mut idx = 0;
        let mut prev_row = None;
        while idx < positions.len() {
            let (row, _) = positions[idx];
            if row >= num_rows {
                return Err(Error::RowOutOfRange { row, num_rows });
            }
            if let Some(prev) = prev_row {
                if prev >= row {
                    return Err(Error::UnsortedPositions(idx));
                }
            }
            prev_row = Some(row);

            // Consume the maximal run of positions sharing this row.
            let start = idx;
            let first = head_len + start;
            while idx < positions.len() && positions[idx].0 == row {
                let (_, col) = positions[idx];
                if col >= num_cols {
                    return Err(Error::ColumnOutOfRange { col, num_cols });
                }
                if idx > start && positions[idx - 1].1 >= col {
                    return Err(Error::UnsortedPositions(idx));
                }
                let node = head_len + idx;
                grid.header[node] = col;
                grid.row_tag[node] = row;

                // Splice into the column directly above the header, so
                // the vertical ring preserves input order top to bottom.
                grid.up[node] = grid.up[col];
                grid.down[node] = col;
                grid.down[grid.up[col]] = node;
                grid.up[col] = node;
                grid.size[col] += 1;

                // Close the row's horizontal ring as it grows.
                if node == first {
                    grid.left[node] = node;
                    grid.right[node] = node;
                } else {
                    grid.left[node] = node - 1;
                    grid.right[node] = first;
                    grid.right[node - 1] = node;
                    grid.left[first] = node;
                }
                idx += 1;
            }
        }

        Ok(grid)
    }

    /// Number of columns (elements of the universe).
    pub fn num_columns(&self) -> usize {
        self.num_cols
    }

    /// Number of candidate rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Index of the root sentinel in the active-column ring.
    pub(crate) fn root(&self) -> usize {
        self.num_cols
    }

    /// True once every column has been covered.
    pub(crate) fn fully_covered(&self) -> bool {
        self.right[self.root()] == self.root()
    }

    pub(crate) fn left_of(&self, node: usize) -> usize {
        self.left[node]
    }

    pub(crate) fn right_of(&self, node: usize) -> usize {
        self.right[node]
    }

    pub(crate) fn down_of(&self, node: usize) -> usize {
        self.down[node]
    }

    pub(crate) fn column_of(&self, node: usize) -> usize {
        self.header[node]
    }

    pub(crate) fn size_of(&self, col: usize) -> usize {
        self.size[col]
    }

    pub(crate) fn tag_of(&self, node: usize) -> usize {
        self.row_tag[node]
    }

    pub(crate) fn is_covered(&self, col: usize) -> bool {
        self.covered[col]
    }

    /// First cell carrying `row` as its tag, in input order.
    pub(crate) fn first_cell_of_row(&self, row: usize) -> Option<usize> {
        (self.num_cols + 1..self.row_tag.len()).find(|&node| self.row_tag[node] == row)
    }

    /// Remove `col` from the active ring, and every row with a cell in
    /// `col` from all other columns. The column's own cells stay on its
    /// vertical ring so `uncover_column` can find the affected rows.
    pub(crate) fn cover_column(&mut self, col: usize) {
        debug_assert!(col < self.num_cols, "not a column header: {}", col);
        debug_assert!(!self.covered[col], "column {} covered twice", col);
        self.covered[col] = true;

        self.left[self.right[col]] = self.left[col];
        self.right[self.left[col]] = self.right[col];

        let mut i = self.down[col];
        while i != col {
            let mut j = self.right[i];
            while j != i {
                self.up[self.down[j]] = self.up[j];
                self.down[self.up[j]] = self.down[j];
                self.size[self.header[j]] -= 1;
                j = self.right[j];
            }
            i = self.down[i];
        }
    }

    /// Exact inverse of [`Grid::cover_column`]: walk up and left where
    /// cover walked down and right, so splices are undone in LIFO order.
    pub(crate) fn uncover_column(&mut self, col: usize) {
        debug_assert!(col < self.num_cols, "not a column header: {}", col);
        debug_assert!(self.covered[col], "column {} is not covered", col);
        self.covered[col] = false;

        let mut i = self.up[col];
        while i != col {
            let mut j = self.left[i];
            while j != i {
                self.size[self.header[j]] += 1;
                self.down[self.up[j]] = j;
                self.up[self.down[j]] = j;
                j = self.left[j];
            }
            i = self.up[i];
        }

        self.right[self.left[col]] = col;
        self.left[self.right[col]] = col;
    }

    /// Every link must be the inverse of its opposite, and each header's
    /// size must agree with a walk of its vertical ring.
    #[cfg(test)]
    pub(crate) fn assert_rings(&self) {
        for i in 0..self.left.len() {
            assert_eq!(self.right[self.left[i]], i, "left/right broken at {}", i);
            assert_eq!(self.left[self.right[i]], i, "right/left broken at {}", i);
            assert_eq!(self.down[self.up[i]], i, "up/down broken at {}", i);
            assert_eq!(self.up[self.down[i]], i, "down/up broken at {}", i);
        }
        for col in 0..self.num_cols {
            let mut count = 0;
            let mut node = self.down[col];
            while node != col {
                count += 1;
                node = self.down[node];
            }
            assert_eq!(self.size[col], count, "size mismatch in column {}", col);
        }
    }
}
