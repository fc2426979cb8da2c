//! Helpers shared by the integration tests: independent validity
//! checks for solver output, so the tests never trust the solver to
//! judge its own answers.

/// Assert that `solution` picks rows whose positions cover every column
/// exactly once.
#[allow(dead_code)]
pub fn assert_exact_cover(num_cols: usize, positions: &[(usize, usize)], solution: &[bool]) {
    let mut hits = vec![0usize; num_cols];
    for &(row, col) in positions {
        if solution[row] {
            hits[col] += 1;
        }
    }
    for (col, &count) in hits.iter().enumerate() {
        assert_eq!(count, 1, "column {} covered {} times", col, count);
    }
}

/// Assert that a solved board is a valid completion of `givens`: right
/// dimensions, digits in range, every given respected, and each digit
/// unique per row, column, and box.
#[allow(dead_code)]
pub fn assert_valid_sudoku(n: usize, givens: &str, board: &[Vec<usize>]) {
    let side = n * n;
    log::debug!("validating a side-{} board against {} given cells", side, givens.chars().filter(|&c| c != '0').count());

    assert_eq!(board.len(), side);
    for (i, row) in board.iter().enumerate() {
        assert_eq!(row.len(), side, "row {} has the wrong width", i);
        for (j, &d) in row.iter().enumerate() {
            assert!((1..=side).contains(&d), "cell ({}, {}) holds {}", i, j, d);
        }
    }

    for (idx, c) in givens.chars().enumerate() {
        if c == '0' {
            continue;
        }
        let d = c.to_digit(36).unwrap() as usize;
        assert_eq!(
            board[idx / side][idx % side],
            d,
            "given at cell ({}, {}) was not kept",
            idx / side,
            idx % side
        );
    }

    let assert_unit = |label: &str, unit: usize, mut digits: Vec<usize>| {
        digits.sort_unstable();
        assert_eq!(
            digits,
            (1..=side).collect::<Vec<_>>(),
            "{} {} repeats a digit",
            label,
            unit
        );
    };
    for i in 0..side {
        assert_unit("row", i, board[i].clone());
        assert_unit("column", i, (0..side).map(|j| board[j][i]).collect());
    }
    for b in 0..side {
        let (bi, bj) = (b / n * n, b % n * n);
        let digits = (0..side).map(|c| board[bi + c / n][bj + c % n]).collect();
        assert_unit("box", b, digits);
    }
}
