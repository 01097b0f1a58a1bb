//! Sequence similarity used to find close matches.
//!
//! The ratio is `2*M / T` where `T` is the total number of characters in both
//! strings and `M` the number of characters in matching blocks, found by
//! repeatedly taking the longest common substring and recursing on the
//! unmatched pieces to its left and right (Ratcliff/Obershelp).

/// Longest common block inside `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long blocks the one starting earliest in `a`, then earliest
/// in `b`, wins. Returns `(i, j, len)`.
fn longest_block(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    let width = bhi - blo;
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo;
            cur[col] = if a[i] == b[j] {
                let k = if col > 0 { prev[col - 1] } else { 0 } + 1;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
                k
            } else {
                0
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

/// Total length of all matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut queue = vec![((0, a.len()), (0, b.len()))];

    while let Some(((alo, ahi), (blo, bhi))) = queue.pop() {
        if alo >= ahi || blo >= bhi {
            continue;
        }
        let (i, j, k) = longest_block(a, b, (alo, ahi), (blo, bhi));
        if k == 0 {
            continue;
        }
        total += k;
        queue.push(((alo, i), (blo, j)));
        queue.push(((i + k, ahi), (j + k, bhi)));
    }

    total
}

/// Similarity ratio in `[0.0, 1.0]`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * matching_chars(&a, &b)) as f64 / total as f64
}

/// Entries of `pool` whose ratio against `word` is at least `cutoff`.
///
/// Sorted by ratio descending; equal ratios keep pool order. At most `n`
/// entries are returned.
pub fn close_matches<'a>(
    word: &str,
    pool: &'a [String],
    n: usize,
    cutoff: f64,
) -> Vec<(&'a str, f64)> {
    if n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(&str, f64)> = pool
        .iter()
        .map(|candidate| (candidate.as_str(), ratio(word, candidate)))
        .filter(|(_, score)| *score >= cutoff)
        .collect();

    // sort_by is stable, so ties stay in pool order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(n);
    scored
}
