#![warn(missing_docs)]

//! Exact cover solving with Knuth's *dancing links* technique.
//!
//! An exact-cover instance is described by the positions of the 1-cells
//! of a sparse 0/1 matrix: each row is a candidate subset, each column
//! an element of the universe to cover. The solver links the matrix
//! into a toroidal grid of doubly-linked rings and runs the classic
//! recursive cover/uncover search, returning the first subfamily of
//! rows that covers every column exactly once.
//!
//! Rows can be forced into the solution ahead of the search, which is
//! how puzzle givens are expressed. Two reductions ship with the crate:
//! [`sudoku`] for N²×N² boards and [`design`] for t-(v, k, 1) block
//! designs (Steiner systems).
//!
//! ```
//! use dlx_cover::run;
//!
//! // Four subsets over the universe {0, .., 5}.
//! let positions = [
//!     (0, 0), (0, 2), (0, 4),         // {0, 2, 4}
//!     (1, 0), (1, 1), (1, 3), (1, 5), // {0, 1, 3, 5}
//!     (2, 1), (2, 3),                 // {1, 3}
//!     (3, 5),                         // {5}
//! ];
//! let solution = run(6, 4, &positions).unwrap().unwrap();
//! assert_eq!(solution, vec![true, false, true, true]);
//! ```

pub mod design;
mod error;
pub mod grid;
pub mod solver;
pub mod sudoku;

pub use error::Error;
pub use solver::{run, run_with_forced, Solver};
