//! Candidate ranking with a bounded memo cache.
//!
//! For a misspelled token and a context the ranker restricts the search to
//! the context's vocabulary pool, gathers fuzzy and phonetic candidates,
//! scores them and keeps the best few above the confidence floor.
//!
//! Results are memoized per `(token, context, max_suggestions)` in an LRU
//! cache. Callers are expected to filter out already-valid tokens before
//! ranking so the cache never fills with trivial "nothing to fix" entries.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use super::phonetic::normalize;
use super::similarity::{close_matches, ratio};
use super::types::{Context, Suggestion, SuggestionMethod};
use super::vocabulary::Vocabulary;

/// Minimum similarity ratio for a fuzzy match
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.5;

/// Minimum confidence for a candidate to be suggested
pub const DEFAULT_MIN_CONFIDENCE: u8 = 60;

/// Default number of memoized rank results
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

const PHONETIC_BONUS: i64 = 15;
const PHONETIC_CAP: i64 = 95;
const PREFIX_BONUS: i64 = 10;
const PREFIX_CAP: i64 = 98;
const PREFIX_LEN: usize = 3;

/// Confidence in `0..=100` that `suggestion` is what `word` meant.
///
/// Case-insensitive equality scores 100. Otherwise the scaled similarity
/// ratio of the lower-cased words is boosted when the phonetic forms match
/// (capped at 95) and when both share their first three characters (capped
/// at 98).
pub fn confidence(word: &str, suggestion: &str) -> u8 {
    let word_lower = word.to_lowercase();
    let suggestion_lower = suggestion.to_lowercase();
    if word_lower == suggestion_lower {
        return 100;
    }

    let mut score = (ratio(&word_lower, &suggestion_lower) * 100.0).round() as i64;

    if normalize(word) == normalize(suggestion) {
        score = (score + PHONETIC_BONUS).min(PHONETIC_CAP);
    }

    if shares_prefix(&word_lower, &suggestion_lower) {
        score = (score + PREFIX_BONUS).min(PREFIX_CAP);
    }

    score.clamp(0, 100) as u8
}

/// Either word starts with the other's first three characters.
fn shares_prefix(a: &str, b: &str) -> bool {
    if a.chars().count() < PREFIX_LEN || b.chars().count() < PREFIX_LEN {
        return false;
    }
    let head = |s: &str| -> String { s.chars().take(PREFIX_LEN).collect() };
    a.starts_with(&head(b)) || b.starts_with(&head(a))
}

/// Snapshot of rank cache usage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    token: String,
    context: Context,
    max_suggestions: usize,
}

struct RankCache {
    entries: LruCache<CacheKey, Vec<Suggestion>>,
    hits: u64,
    misses: u64,
}

/// Ranks correction candidates against a shared vocabulary.
pub struct CandidateRanker {
    vocabulary: Arc<Vocabulary>,
    similarity_cutoff: f64,
    min_confidence: u8,
    cache: Mutex<RankCache>,
}

impl CandidateRanker {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self::with_settings(
            vocabulary,
            DEFAULT_SIMILARITY_CUTOFF,
            DEFAULT_MIN_CONFIDENCE,
            NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).expect("1024 is non-zero"),
        )
    }

    pub fn with_settings(
        vocabulary: Arc<Vocabulary>,
        similarity_cutoff: f64,
        min_confidence: u8,
        cache_capacity: NonZeroUsize,
    ) -> Self {
        Self {
            vocabulary,
            similarity_cutoff,
            min_confidence,
            cache: Mutex::new(RankCache {
                entries: LruCache::new(cache_capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Ranked suggestions for `token` in `context`, best first.
    pub fn rank(&self, token: &str, context: Context, max_suggestions: usize) -> Vec<Suggestion> {
        if token.is_empty() || max_suggestions == 0 {
            return Vec::new();
        }

        let key = CacheKey {
            token: token.to_string(),
            context,
            max_suggestions,
        };

        {
            let mut cache = self.cache.lock();
            let cached = cache.entries.get(&key).cloned();
            if let Some(hit) = cached {
                cache.hits += 1;
                trace!(token, %context, "rank cache hit");
                return hit;
            }
            cache.misses += 1;
        }

        trace!(token, %context, "rank cache miss");
        let ranked = self.rank_uncached(token, context, max_suggestions);
        self.cache.lock().entries.put(key, ranked.clone());
        ranked
    }

    fn rank_uncached(&self, token: &str, context: Context, max_suggestions: usize) -> Vec<Suggestion> {
        let pool = self.vocabulary.pool(context);

        let fuzzy = close_matches(
            token,
            pool,
            max_suggestions.saturating_mul(2),
            self.similarity_cutoff,
        );

        let token_form = normalize(token);
        let phonetic = pool.iter().map(String::as_str).filter(|candidate| {
            !fuzzy.iter().any(|(word, _)| word == candidate) && normalize(candidate) == token_form
        });

        let discovered = fuzzy
            .iter()
            .map(|(word, _)| (*word, SuggestionMethod::Standard))
            .chain(phonetic.map(|word| (word, SuggestionMethod::Phonetic)));

        let mut ranked: Vec<Suggestion> = discovered
            .filter_map(|(word, method)| {
                let score = confidence(token, word);
                (score >= self.min_confidence).then(|| Suggestion {
                    word: word.to_string(),
                    confidence: score,
                    method,
                })
            })
            .collect();

        // Stable: equal scores keep discovery order (fuzzy first, then phonetic)
        ranked.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        ranked.truncate(max_suggestions);
        ranked
    }

    /// Drop every memoized result and reset the counters.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.entries.clear();
        cache.hits = 0;
        cache.misses = 0;
    }

    pub fn cache_stats(&self) -> CacheStats {
        let cache = self.cache.lock();
        CacheStats {
            hits: cache.hits,
            misses: cache.misses,
            entries: cache.entries.len(),
            capacity: cache.entries.cap().get(),
        }
    }
}
