//! Reduction of N²×N² Sudoku to exact cover.
//!
//! For a board of order `n` (the box side; 3 for classic Sudoku) the
//! side length is `side = n²` and the matrix has `4·side²` columns in
//! four families:
//!
//! 1. row–digit: digit `d` appears in row `i`,
//! 2. column–digit: digit `d` appears in column `j`,
//! 3. box–digit: digit `d` appears in box `b`,
//! 4. cell occupancy: cell `(i, j)` holds some digit.
//!
//! There is one candidate row per `(i, j, d)` triple, `side³` in all,
//! touching one column of each family. Givens become forced rows via
//! the tag formula `i*side² + j*side + (d - 1)`.

use crate::error::Error;
use crate::solver;

fn side_length(n: usize) -> usize {
    n * n
}

/// Number of columns in the reduction for order `n`.
pub fn num_columns(n: usize) -> usize {
    4 * side_length(n) * side_length(n)
}

/// Number of candidate rows in the reduction for order `n`.
pub fn num_rows(n: usize) -> usize {
    let side = side_length(n);
    side * side * side
}

/// Row tag of the candidate placing digit `d` (one-based) in cell
/// `(i, j)`.
fn row_tag(side: usize, i: usize, j: usize, d: usize) -> usize {
    i * side * side + j * side + (d - 1)
}

/// The sorted position list for an order-`n` board: four positions per
/// candidate row, one in each constraint family.
pub fn make_positions(n: usize) -> Vec<(usize, usize)> {
    let side = side_length(n);
    let mut positions = Vec::with_capacity(4 * side * side * side);
    for i in 0..side {
        for j in 0..side {
            let b = (i / n) * n + j / n;
            for d in 1..=side {
                let row = row_tag(side, i, j, d);
                positions.push((row, i * side + (d - 1)));
                positions.push((row, side * side + j * side + (d - 1)));
                positions.push((row, 2 * side * side + b * side + (d - 1)));
                positions.push((row, 3 * side * side + i * side + j));
            }
        }
    }
    log::debug!(
        "order-{} sudoku: {} candidates over {} columns, {} positions",
        n,
        num_rows(n),
        num_columns(n),
        positions.len()
    );
    positions
}

/// Translate `(row, column, digit)` givens (digit one-based) into
/// forced-row tags.
pub fn fixings_from_triples(
    n: usize,
    givens: &[(usize, usize, usize)],
) -> Result<Vec<usize>, Error> {
    let side = side_length(n);
    givens
        .iter()
        .map(|&(i, j, d)| {
            if i >= side || j >= side || d < 1 || d > side {
                Err(Error::GivenOutOfRange {
                    row: i,
                    col: j,
                    digit: d,
                    side,
                })
            } else {
                Ok(row_tag(side, i, j, d))
            }
        })
        .collect()
}

/// Translate a row-major board string into forced-row tags.
///
/// The string must be exactly `side²` characters: `'0'` for an empty
/// cell, `'1'..='9'` and then `'A'..` for digits of boards wider than
/// nine.
pub fn fixings_from_string(n: usize, board: &str) -> Result<Vec<usize>, Error> {
    let side = side_length(n);
    let expected = side * side;
    let found = board.chars().count();
    if found != expected {
        return Err(Error::BoardLength { found, expected });
    }

    let mut fixings = Vec::new();
    for (idx, c) in board.chars().enumerate() {
        let digit = match c {
            '0' => continue,
            '1'..='9' => c as usize - '0' as usize,
            'A'..='Z' => c as usize - 'A' as usize + 10,
            _ => return Err(Error::BoardCharacter(c)),
        };
        if digit > side {
            return Err(Error::BoardCharacter(c));
        }
        fixings.push(row_tag(side, idx / side, idx % side, digit));
    }
    log::debug!("parsed {} givens from board string", fixings.len());
    Ok(fixings)
}

/// Decode a solver result into a `side × side` grid of digits in
/// `1..=side`.
///
/// The vector must be `side³` entries long and fill every cell exactly
/// once; anything else is rejected.
pub fn extract_board(n: usize, solution: &[bool]) -> Result<Vec<Vec<usize>>, Error> {
    let side = side_length(n);
    let expected = side * side * side;
    if solution.len() != expected {
        return Err(Error::SolutionLength {
            found: solution.len(),
            expected,
        });
    }

    let mut board = vec![vec![0usize; side]; side];
    for (tag, &chosen) in solution.iter().enumerate() {
        if !chosen {
            continue;
        }
        let i = tag / (side * side);
        let j = (tag / side) % side;
        let d = tag % side + 1;
        if board[i][j] != 0 {
            return Err(Error::MalformedSolution {
                row: i,
                col: j,
                count: 2,
            });
        }
        board[i][j] = d;
    }
    for (i, row) in board.iter().enumerate() {
        if let Some(j) = row.iter().position(|&d| d == 0) {
            return Err(Error::MalformedSolution {
                row: i,
                col: j,
                count: 0,
            });
        }
    }
    Ok(board)
}

/// Solve an order-`n` board given as a row-major string, returning the
/// completed digit grid, or `None` when the givens admit no completion.
pub fn solve_board(n: usize, board: &str) -> Result<Option<Vec<Vec<usize>>>, Error> {
    let positions = make_positions(n);
    let fixings = fixings_from_string(n, board)?;
    let solution = solver::run_with_forced(num_columns(n), num_rows(n), &positions, &fixings)?;
    solution.map(|s| extract_board(n, &s)).transpose()
}
