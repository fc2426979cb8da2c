//! Backtracking exact-cover search over a [`Grid`].
//!
//! The driver is Knuth's recursive cover/uncover scheme: pick the
//! active column with the fewest candidates, try each of its rows in
//! turn, and splice everything back on the way out. Rows can be forced
//! into the solution ahead of the search, which permanently restricts
//! the matrix for the lifetime of the solver.

use crate::error::Error;
use crate::grid::Grid;

/// An exact-cover problem instance ready to be searched.
#[derive(Debug)]
pub struct Solver {
    grid: Grid,
    solution: Vec<bool>,
    infeasible: bool,
}

impl Solver {
    /// Build a solver for the matrix described by `positions`.
    ///
    /// See [`Grid::new`] for the input contract.
    pub fn new(
        num_cols: usize,
        num_rows: usize,
        positions: &[(usize, usize)],
    ) -> Result<Self, Error> {
        Ok(Solver {
            grid: Grid::new(num_cols, num_rows, positions)?,
            solution: vec![false; num_rows],
            infeasible: false,
        })
    }

    /// Force `row` into every solution this solver will return.
    ///
    /// Covers all of the row's columns up front; the covers are never
    /// undone, so the restriction is permanent. Forcing a row twice is
    /// a no-op. Forcing a row that collides with an earlier forced row
    /// (the two share a column) makes the instance unsolvable and
    /// [`Solver::solve`] will return `None`.
    ///
    /// A row number with no cells in the matrix is an error.
    pub fn force_row(&mut self, row: usize) -> Result<(), Error> {
        if self.solution.get(row) == Some(&true) {
            return Ok(());
        }
        let anchor = self
            .grid
            .first_cell_of_row(row)
            .ok_or(Error::UnknownForcedRow(row))?;
        self.solution[row] = true;

        let mut node = anchor;
        loop {
            let col = self.grid.column_of(node);
            if self.grid.is_covered(col) {
                // Collision with a previously forced row. Covering the
                // column again would corrupt the size counters, so stop
                // here and report the conflict through solve().
                self.infeasible = true;
                return Ok(());
            }
            self.grid.cover_column(col);
            node = self.grid.right_of(node);
            if node == anchor {
                break;
            }
        }
        Ok(())
    }

    /// Find the first cover, as a boolean vector with `true` at every
    /// chosen row, or `None` if no cover extends the forced rows.
    ///
    /// The search is deterministic and restores the matrix before
    /// returning, so repeated calls yield the same answer.
    pub fn solve(&mut self) -> Option<Vec<bool>> {
        if self.infeasible {
            return None;
        }
        Self::search(&mut self.grid, &mut self.solution)
    }

    /// One level of the recursive search. Returns a snapshot of the
    /// solution vector taken at the moment the active ring emptied;
    /// every splice performed on the way down is undone on the way
    /// back up, success or not.
    fn search(grid: &mut Grid, solution: &mut Vec<bool>) -> Option<Vec<bool>> {
        if grid.fully_covered() {
            return Some(solution.clone());
        }

        // S-heuristic: fewest remaining candidates, first seen wins.
        let root = grid.root();
        let mut col = grid.right_of(root);
        let mut probe = grid.right_of(col);
        while probe != root {
            if grid.size_of(probe) < grid.size_of(col) {
                col = probe;
            }
            probe = grid.right_of(probe);
        }
        if grid.size_of(col) == 0 {
            return None;
        }

        grid.cover_column(col);
        let mut found = None;
        let mut row = grid.down_of(col);
        while row != col {
            solution[grid.tag_of(row)] = true;
            let mut node = grid.right_of(row);
            while node != row {
                grid.cover_column(grid.column_of(node));
                node = grid.right_of(node);
            }

            found = Self::search(grid, solution);

            let mut node = grid.left_of(row);
            while node != row {
                grid.uncover_column(grid.column_of(node));
                node = grid.left_of(node);
            }
            solution[grid.tag_of(row)] = false;

            if found.is_some() {
                break;
            }
            row = grid.down_of(row);
        }
        grid.uncover_column(col);
        found
    }
}

/// Solve the exact-cover instance described by `positions`.
///
/// Returns the first cover found as a boolean vector of length
/// `num_rows`, or `None` if no cover exists.
pub fn run(
    num_cols: usize,
    num_rows: usize,
    positions: &[(usize, usize)],
) -> Result<Option<Vec<bool>>, Error> {
    let mut solver = Solver::new(num_cols, num_rows, positions)?;
    Ok(solver.solve())
}

/// Solve the instance under the condition that every row in
/// `forced_rows` is part of the cover.
///
/// Returns a cover extending the forced set, or `None` if none exists
/// (including the case where the forced rows collide among themselves).
pub fn run_with_forced(
    num_cols: usize,
    num_rows: usize,
    positions: &[(usize, usize)],
    forced_rows: &[usize],
) -> Result<Option<Vec<bool>>, Error> {
    let mut solver = Solver::new(num_cols, num_rows, positions)?;
    for &row in forced_rows {
        solver.force_row(row)?;
    }
    Ok(solver.solve())
}
