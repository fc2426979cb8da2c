mod common;

use common::assert_valid_sudoku;
use dlx_cover::{sudoku, Error};

const CANONICAL: &str =
    "100089457738000000040010000004050906000000000000000728080001000007008095060090300";

#[test]
#[cfg_attr(miri, ignore)]
fn canonical_board_is_solved() {
    env_logger::init();

    let board = sudoku::solve_board(3, CANONICAL).unwrap().unwrap();
    log::debug!("solved board: {:?}", board);
    assert_valid_sudoku(3, CANONICAL, &board);
}

#[test]
fn canonical_triples_match_the_string() {
    let triples = [
        (0, 0, 1),
        (0, 4, 8),
        (0, 5, 9),
        (0, 6, 4),
        (0, 7, 5),
        (0, 8, 7),
        (1, 0, 7),
        (1, 1, 3),
        (1, 2, 8),
        (2, 1, 4),
        (2, 4, 1),
        (3, 2, 4),
        (3, 4, 5),
        (3, 6, 9),
        (3, 8, 6),
        (5, 6, 7),
        (5, 7, 2),
        (5, 8, 8),
        (6, 1, 8),
        (6, 5, 1),
        (7, 2, 7),
        (7, 5, 8),
        (7, 7, 9),
        (7, 8, 5),
        (8, 1, 6),
        (8, 4, 9),
        (8, 6, 3),
    ];
    assert_eq!(
        sudoku::fixings_from_triples(3, &triples).unwrap(),
        sudoku::fixings_from_string(3, CANONICAL).unwrap()
    );
}

#[test]
#[cfg_attr(miri, ignore)]
fn empty_boards_are_solvable() {
    let board = sudoku::solve_board(2, &"0".repeat(16)).unwrap().unwrap();
    assert_valid_sudoku(2, &"0".repeat(16), &board);

    let board = sudoku::solve_board(3, &"0".repeat(81)).unwrap().unwrap();
    assert_valid_sudoku(3, &"0".repeat(81), &board);
}

#[test]
#[cfg_attr(miri, ignore)]
fn end_to_end_through_the_raw_surface() {
    // Same pipeline solve_board uses, spelled out.
    let positions = sudoku::make_positions(3);
    let fixings = sudoku::fixings_from_string(3, CANONICAL).unwrap();
    let solution = dlx_cover::run_with_forced(
        sudoku::num_columns(3),
        sudoku::num_rows(3),
        &positions,
        &fixings,
    )
    .unwrap()
    .unwrap();

    // Every forced row survives into the solution.
    assert!(fixings.iter().all(|&row| solution[row]));
    common::assert_exact_cover(sudoku::num_columns(3), &positions, &solution);

    let board = sudoku::extract_board(3, &solution).unwrap();
    assert_valid_sudoku(3, CANONICAL, &board);
}

#[test]
fn contradictory_givens_have_no_completion() {
    // Two 1s in the first row collide on the row-digit constraint.
    let mut board = "0".repeat(81);
    board.replace_range(0..2, "11");
    assert_eq!(sudoku::solve_board(3, &board).unwrap(), None);
}

#[test]
fn malformed_boards_are_rejected() {
    assert_eq!(
        sudoku::solve_board(3, "123"),
        Err(Error::BoardLength {
            found: 3,
            expected: 81
        })
    );

    let mut board = "0".repeat(81);
    board.replace_range(0..1, "?");
    assert_eq!(
        sudoku::solve_board(3, &board),
        Err(Error::BoardCharacter('?'))
    );
}
