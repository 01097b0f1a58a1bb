//! Identifier occurrence extraction.
//!
//! A single left-to-right scan over the source tracks string-literal state
//! incrementally and reports three kinds of occurrence:
//!
//! - method calls: `.name(` (whitespace allowed around the name)
//! - function calls: `name(` not preceded by a method dot
//! - statement keywords: one of [`KEYWORD_MARKERS`] at the start of the text
//!   or after `{`, `}` or `;`
//!
//! Keyword and call occurrences may share an identifier (`agar (x)`); both are
//! reported, keyword first. Deduplication happens when fixes are recorded.
//!
//! String literals are best-effort: an identifier is skipped when the number
//! of unescaped `"` before it is odd, or the number of unescaped `'` before it
//! is odd. The two counts are independent, so an apostrophe inside a
//! double-quoted string also toggles single-quote state. Unbalanced quotes
//! simply leave the rest of the text "inside" a literal.

use tracing::trace;

use super::context::{classify_at, is_statement_start, is_word_byte, word_end};
use super::types::{Context, Occurrence};

/// Statement-introducing keyword spellings reported as keyword occurrences.
pub const KEYWORD_MARKERS: &[&str] = &[
    "agar", "nahi_to", "ya_phir", "jabtak", "liye", "karya", "class", "vapas", "try", "throw",
];

/// Quote state carried through the scan.
#[derive(Debug, Default, Clone, Copy)]
struct QuoteState {
    double: bool,
    single: bool,
}

impl QuoteState {
    fn inside_literal(self) -> bool {
        self.double || self.single
    }
}

/// All candidate occurrences in `text`, in source order.
pub fn extract(text: &str) -> Vec<Occurrence> {
    let bytes = text.as_bytes();
    let mut occurrences = Vec::new();
    let mut quotes = QuoteState::default();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let escaped = i > 0 && bytes[i - 1] == b'\\';

        match b {
            b'"' if !escaped => quotes.double = !quotes.double,
            b'\'' if !escaped => quotes.single = !quotes.single,
            _ if is_word_byte(b) => {
                let end = word_end(text, i);
                // Digit-led runs are numbers, not identifiers
                if !b.is_ascii_digit() {
                    if quotes.inside_literal() {
                        trace!(word = &text[i..end], offset = i, "skipping identifier in literal");
                    } else {
                        scan_identifier(text, i, end, &mut occurrences);
                    }
                }
                i = end;
                continue;
            }
            _ => {}
        }

        i += 1;
    }

    occurrences
}

/// Record the occurrences formed by the identifier at `start..end`.
fn scan_identifier(text: &str, start: usize, end: usize, out: &mut Vec<Occurrence>) {
    let word = &text[start..end];

    if KEYWORD_MARKERS.contains(&word) && is_statement_start(&text[..start]) {
        out.push(Occurrence {
            word: word.to_string(),
            context: Context::Keyword,
            offset: start,
            span: start..end,
            matched_text: word.to_string(),
        });
    }

    let rest = &text[end..];
    let gap = rest.len() - rest.trim_start().len();
    if !rest[gap..].starts_with('(') {
        return;
    }
    let span_end = end + gap + 1;

    let (context, span_start) = match classify_at(text, start) {
        Context::Method => {
            let dot = text[..start].trim_end().len() - 1;
            (Context::Method, dot)
        }
        _ => (Context::Function, start),
    };

    out.push(Occurrence {
        word: word.to_string(),
        context,
        offset: start,
        span: span_start..span_end,
        matched_text: text[span_start..span_end].to_string(),
    });
}
