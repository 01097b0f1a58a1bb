//! Phonetic normalization for romanized identifiers.
//!
//! Sound-alike clusters are collapsed to a single letter so that spellings
//! such as `khatam`/`katam` or `phir`/`fir` share a canonical form. The
//! normalized form only ever boosts confidence; it never admits a candidate
//! on its own unless the ranker is configured with a low confidence floor.

/// Ordered cluster replacements. Longer clusters come first so that `chh`
/// is reduced before `ch`.
const CLUSTERS: &[(&str, &str)] = &[
    ("chh", "c"),
    ("ph", "f"),
    ("kh", "k"),
    ("gh", "g"),
    ("bh", "b"),
    ("dh", "d"),
    ("th", "t"),
    ("jh", "j"),
    ("sh", "s"),
    ("ch", "c"),
    ("ck", "k"),
    ("aa", "a"),
    ("ee", "i"),
    ("oo", "u"),
    ("w", "v"),
    ("z", "j"),
];

/// Canonical phonetic form of `word`.
///
/// Replacements run in [`CLUSTERS`] order on the word as written, then the
/// result is lower-cased.
pub fn normalize(word: &str) -> String {
    let mut form = word.to_string();
    for (cluster, replacement) in CLUSTERS {
        if form.contains(cluster) {
            form = form.replace(cluster, replacement);
        }
    }
    form.to_lowercase()
}

/// Two words are phonetically equivalent iff their normalized forms match.
pub fn sounds_alike(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
