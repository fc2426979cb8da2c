mod common;

use common::assert_exact_cover;
use dlx_cover::design::{binomial, make_positions, run_design, unrank_subset};

#[test]
fn fano_plane_exists() {
    // The 2-(7, 3, 1) design: seven triples covering all 21 pairs.
    let solution = run_design(7, 3, 2).unwrap();
    let blocks = solution.iter().filter(|&&b| b).count();
    assert_eq!(blocks, 7);
    assert_exact_cover(binomial(7, 2), &make_positions(7, 3, 2), &solution);
}

#[test]
fn fano_blocks_cover_every_pair_once() {
    let solution = run_design(7, 3, 2).unwrap();
    let mut pair_counts = vec![0usize; 21];
    for (rank, &chosen) in solution.iter().enumerate() {
        if !chosen {
            continue;
        }
        let block = unrank_subset(7, 3, rank);
        for a in 0..3 {
            for b in a + 1..3 {
                // Rank of the pair {block[a], block[b]} by direct count.
                let pair = pair_index(7, block[a], block[b]);
                pair_counts[pair] += 1;
            }
        }
    }
    assert!(pair_counts.iter().all(|&c| c == 1));
}

/// Lexicographic rank of the pair `{a, b}` (a < b) in `{0, .., v-1}`.
fn pair_index(v: usize, a: usize, b: usize) -> usize {
    (0..a).map(|x| v - x - 1).sum::<usize>() + (b - a - 1)
}

#[test]
#[cfg_attr(miri, ignore)]
fn no_steiner_triple_system_on_eight_points() {
    // v ≡ 0 or 4 (mod 6) fails the divisibility conditions.
    assert_eq!(run_design(8, 3, 2), None);
}

#[test]
fn steiner_triple_system_on_nine_points() {
    let solution = run_design(9, 3, 2).unwrap();
    assert_eq!(solution.iter().filter(|&&b| b).count(), 12);
    assert_exact_cover(binomial(9, 2), &make_positions(9, 3, 2), &solution);
}

#[test]
fn trivial_design_parameters() {
    // k = v: the single full block covers every t-subset at once only
    // if it covers each exactly once, which holds for any t <= v.
    let solution = run_design(5, 5, 2).unwrap();
    assert_eq!(solution, vec![true]);

    // t = k: the blocks are the t-subsets themselves.
    let solution = run_design(4, 2, 2).unwrap();
    assert_eq!(solution.iter().filter(|&&b| b).count(), binomial(4, 2));
}
