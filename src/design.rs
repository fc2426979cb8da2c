//! t-(v, k, 1) block designs (Steiner systems) as exact cover.
//!
//! The universe is the set of t-subsets of `{0, .., v-1}`; the
//! candidate rows are the k-subsets, each covering the t-subsets it
//! contains. An exact cover is then precisely a Steiner system: a
//! family of blocks in which every t-subset appears once.
//!
//! Subsets are identified by their rank in lexicographic order, with
//! the standard combinatorial number system doing the translation.

use crate::solver;

/// Binomial coefficient `C(n, r)`; zero when `r > n`.
pub fn binomial(n: usize, r: usize) -> usize {
    if n < r {
        return 0;
    }
    let larger = r.max(n - r);
    let mut f = 1;
    for i in larger + 1..=n {
        f *= i;
    }
    for i in 1..=n - larger {
        f /= i;
    }
    f
}

/// Lexicographic rank of a k-subset of `{0, .., v-1}`.
///
/// `set` must be strictly increasing with entries below `v`.
pub fn rank_subset(v: usize, set: &[usize]) -> usize {
    let k = set.len();
    let mut rank = binomial(v, k);
    for (i, &e) in set.iter().enumerate() {
        rank -= binomial(v - e - 1, k - i);
    }
    rank - 1
}

/// The k-subset of `{0, .., v-1}` with the given lexicographic rank.
///
/// `rank` must lie in `0..binomial(v, k)`.
pub fn unrank_subset(v: usize, k: usize, rank: usize) -> Vec<usize> {
    let mut set = vec![0; k];
    if k == 0 {
        return set;
    }

    let mut vi = binomial(v, k);
    let mut j = v;
    let mut ki = k;
    let mut s = rank + 1;
    for entry in set.iter_mut().take(k - 1) {
        while s > vi - binomial(j, ki) {
            j -= 1;
        }
        *entry = v - j - 1;
        s = s + binomial(j + 1, ki) - vi;
        ki -= 1;
        vi = binomial(j, ki);
    }
    set[k - 1] = v + s - vi - 1;
    set
}

/// Successor of `set` in the lexicographic order of k-subsets of
/// `{0, .., v-1}`.
///
/// The last subset has no successor; the result is then unspecified.
pub fn successor_subset(v: usize, set: &[usize]) -> Vec<usize> {
    let k = set.len();
    let mut next = set.to_vec();
    for i in (0..k).rev() {
        next[i] += 1;
        if next[i] < v && next[i] + (k - i) <= v {
            for j in i + 1..k {
                next[j] = next[i] + j - i;
            }
            break;
        }
    }
    next
}

/// The sorted position list for a t-(v, k, 1) design instance:
/// `C(v, t)` columns, `C(v, k)` rows, `C(k, t)` positions per row.
pub fn make_positions(v: usize, k: usize, t: usize) -> Vec<(usize, usize)> {
    let rows = binomial(v, k);
    let per_row = binomial(k, t);
    let mut positions = Vec::with_capacity(rows * per_row);
    for row in 0..rows {
        let kset = unrank_subset(v, k, row);
        for c in 0..per_row {
            // The c-th t-subset of the block, as indices into kset.
            let picks = unrank_subset(k, t, c);
            let tset: Vec<usize> = picks.iter().map(|&i| kset[i]).collect();
            positions.push((row, rank_subset(v, &tset)));
        }
    }
    log::debug!(
        "{}-({}, {}, 1) design: {} blocks over {} columns, {} positions",
        t,
        v,
        k,
        rows,
        binomial(v, t),
        positions.len()
    );
    positions
}

/// Search for a t-(v, k, 1) design.
///
/// Returns a boolean vector over the `C(v, k)` k-subsets, `true` at
/// each chosen block, or `None` when no such design exists.
pub fn run_design(v: usize, k: usize, t: usize) -> Option<Vec<bool>> {
    let positions = make_positions(v, k, t);
    solver::run(binomial(v, t), binomial(v, k), &positions)
        .expect("design positions are sorted by construction")
}
