#![no_main]

use dlx_cover::run;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct SmallCoverInput {
    num_cols: usize,
    rows: Vec<Vec<usize>>,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallCoverInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_cols = usize::from(u.int_in_range::<u8>(0..=12)?);
        let num_rows = usize::from(u.int_in_range::<u8>(0..=16)?);

        let mut rows = Vec::with_capacity(num_rows);
        for _ in 0..num_rows {
            let mut cols = Vec::new();
            for col in 0..num_cols {
                if u.arbitrary::<bool>()? {
                    cols.push(col);
                }
            }
            rows.push(cols);
        }

        Ok(SmallCoverInput { num_cols, rows })
    }
}

fuzz_target!(|input: SmallCoverInput| {
    let mut positions = Vec::new();
    for (row, cols) in input.rows.iter().enumerate() {
        for &col in cols {
            positions.push((row, col));
        }
    }

    let solution = run(input.num_cols, input.rows.len(), &positions)
        .expect("generated positions are sorted and in range");

    if let Some(solution) = solution {
        assert_eq!(solution.len(), input.rows.len());
        for col in 0..input.num_cols {
            let covering = input
                .rows
                .iter()
                .enumerate()
                .filter(|(row, cols)| solution[*row] && cols.contains(&col))
                .count();
            assert_eq!(covering, 1, "column {} covered {} times", col, covering);
        }
    }
});
