//! Error reporting for malformed solver and adapter input.

/// The ways an exact-cover instance or an adapter input can be rejected.
///
/// An exhausted search is not an error: entry points report "no cover
/// exists" as `None` and reserve `Error` for input that never produced a
/// usable matrix in the first place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Positions are out of (row, column) order or contain a duplicate.
    #[error("positions not sorted by (row, column) at index {0}")]
    UnsortedPositions(usize),
    /// A position names a column outside the declared column count.
    #[error("column {col} out of range for a {num_cols}-column matrix")]
    ColumnOutOfRange {
        /// The offending column index.
        col: usize,
        /// The declared number of columns.
        num_cols: usize,
    },
    /// A position names a row outside the declared row count.
    #[error("row {row} out of range for a {num_rows}-row matrix")]
    RowOutOfRange {
        /// The offending row number.
        row: usize,
        /// The declared number of rows.
        num_rows: usize,
    },
    /// A forced row has no cells in the matrix.
    #[error("forced row {0} has no cells in the matrix")]
    UnknownForcedRow(usize),
    /// A board string has the wrong length for its order.
    #[error("board string is {found} characters long, expected {expected}")]
    BoardLength {
        /// Length of the string that was passed in.
        found: usize,
        /// Length required by the board order.
        expected: usize,
    },
    /// A board string contains a character that is not a digit of the board.
    #[error("invalid board character {0:?}")]
    BoardCharacter(char),
    /// A given names a cell or digit that does not fit on the board.
    #[error("given ({row}, {col}) digit {digit} does not fit a side-{side} board")]
    GivenOutOfRange {
        /// Row of the given.
        row: usize,
        /// Column of the given.
        col: usize,
        /// One-based digit of the given.
        digit: usize,
        /// Side length of the board.
        side: usize,
    },
    /// A solution vector has the wrong length for its board.
    #[error("solution vector is {found} entries long, expected {expected}")]
    SolutionLength {
        /// Length of the vector that was passed in.
        found: usize,
        /// Length required by the board order.
        expected: usize,
    },
    /// A solution vector does not place exactly one digit in some cell.
    #[error("solution fills cell ({row}, {col}) {count} times")]
    MalformedSolution {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// How many digits the vector places there.
        count: usize,
    },
}
