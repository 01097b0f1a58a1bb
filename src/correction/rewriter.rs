//! Safe text rewriting for accepted corrections.
//!
//! Each fix is tied to the exact span its occurrence was found at. Spans are
//! rewritten from the end of the text backwards so earlier offsets stay
//! valid, and every byte outside a rewritten span is copied unchanged.
//!
//! Before a span is touched it is re-checked against a pattern built from the
//! escaped original token (`.name(` for methods, `name(` otherwise, with
//! optional whitespace before the parenthesis). Spans that no longer match,
//! overlap an edit already applied, or belong to exempt words are skipped.

use itertools::Itertools;
use regex::Regex;
use tracing::{debug, warn};

use super::context::is_word_byte;
use super::types::{AutoFix, Context, FixRecord, Occurrence};
use super::vocabulary::Vocabulary;

/// An occurrence paired with the word it should become.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFix {
    pub occurrence: Occurrence,
    pub suggestion: String,
}

impl PendingFix {
    pub fn new(occurrence: Occurrence, suggestion: impl Into<String>) -> Self {
        Self {
            occurrence,
            suggestion: suggestion.into(),
        }
    }
}

/// Anchored pattern for the call form of `occurrence`.
fn call_pattern(occurrence: &Occurrence) -> Result<Regex, regex::Error> {
    let name = regex::escape(&occurrence.word);
    match occurrence.context {
        Context::Method => Regex::new(&format!(r"^\.\s*{}\s*\($", name)),
        _ => Regex::new(&format!(r"^{}\s*\($", name)),
    }
}

fn replacement(fix: &PendingFix) -> String {
    match fix.occurrence.context {
        Context::Method => format!(".{}(", fix.suggestion),
        _ => format!("{}(", fix.suggestion),
    }
}

/// Whether `fix` can be applied to `text` as found.
fn span_matches(text: &str, fix: &PendingFix) -> bool {
    let occurrence = &fix.occurrence;
    let Some(found) = text.get(occurrence.span.clone()) else {
        return false;
    };
    if found != occurrence.matched_text {
        return false;
    }

    // Plain calls must not be the tail of a longer identifier
    if occurrence.context != Context::Method {
        let start = occurrence.span.start;
        if start > 0 && is_word_byte(text.as_bytes()[start - 1]) {
            return false;
        }
    }

    match call_pattern(occurrence) {
        Ok(pattern) => pattern.is_match(found),
        Err(e) => {
            warn!(word = %occurrence.word, error = %e, "could not build rewrite pattern");
            false
        }
    }
}

/// Rewrite `text` with `fixes`, given in discovery order.
///
/// Fixes for reserved commands or words that are already valid (ignoring
/// case) are dropped. The returned fix records are deduplicated by
/// `(original, suggested)` and listed in first-discovered order.
pub fn apply_fixes(text: &str, fixes: &[PendingFix], vocabulary: &Vocabulary) -> AutoFix {
    let mut order: Vec<usize> = (0..fixes.len())
        .filter(|&idx| !vocabulary.is_exempt(&fixes[idx].occurrence.word))
        .collect();
    // Latest span first; stable so equal spans keep reverse discovery order
    order.reverse();
    order.sort_by(|&a, &b| fixes[b].occurrence.span.start.cmp(&fixes[a].occurrence.span.start));

    let mut corrected = text.to_string();
    let mut applied = vec![false; fixes.len()];
    let mut floor = text.len();

    for idx in order {
        let fix = &fixes[idx];
        let span = fix.occurrence.span.clone();

        if span.end > floor {
            debug!(word = %fix.occurrence.word, offset = span.start, "skipping overlapping fix");
            continue;
        }
        if !span_matches(text, fix) {
            warn!(
                word = %fix.occurrence.word,
                offset = span.start,
                "source no longer matches occurrence, fix skipped"
            );
            continue;
        }

        corrected.replace_range(span.clone(), &replacement(fix));
        floor = span.start;
        applied[idx] = true;
    }

    let records: Vec<FixRecord> = fixes
        .iter()
        .zip(&applied)
        .filter(|(_, done)| **done)
        .map(|(fix, _)| fix)
        .unique_by(|fix| (fix.occurrence.word.clone(), fix.suggestion.clone()))
        .map(|fix| FixRecord {
            original: fix.occurrence.word.clone(),
            suggested: fix.suggestion.clone(),
            context: fix.occurrence.context,
        })
        .collect();

    AutoFix {
        text: corrected,
        fixes: records,
    }
}
