//! Solve a 9×9 Sudoku from the command line.
//!
//! ```bash
//! cargo run --release --example sudoku 100089457738000000040010000004050906000000000000000728080001000007008095060090300
//! ```

use dlx_cover::sudoku;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("board string needed (81 characters, '0' for empty)");
        std::process::exit(1);
    }

    match sudoku::solve_board(3, &args[1]) {
        Ok(Some(board)) => {
            for row in board {
                let line: String = row
                    .iter()
                    .map(|&d| char::from_digit(d as u32, 10).unwrap())
                    .collect();
                println!("{}", line);
            }
        }
        Ok(None) => {
            eprintln!("no solution");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
