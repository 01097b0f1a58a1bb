//! Local context classification for identifier occurrences.
//!
//! This is a lexical heuristic over the text on either side of an
//! identifier. It does not track nesting, brace matching or string state;
//! string literals are excluded by the extractor before classification.

use super::types::Context;

/// Identifier characters: ASCII letters, digits and underscore.
#[inline]
pub(super) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Byte offset just past the identifier starting at `start`.
pub(super) fn word_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut end = start;
    while end < bytes.len() && is_word_byte(bytes[end]) {
        end += 1;
    }
    end
}

/// Classify the identifier that starts at byte offset `position`.
///
/// Rules, first match wins:
/// 1. text before (ignoring trailing whitespace) ends with a single `.` → `Method`
/// 2. text after the identifier (ignoring leading whitespace) starts with `(` → `Function`
/// 3. nothing but whitespace before, or the last non-space character is
///    `{`, `}` or `;` → `Keyword`
/// 4. otherwise → `General`
///
/// Positions past the end of `text` or inside a multi-byte character
/// classify as `General`.
pub fn classify_at(text: &str, position: usize) -> Context {
    if position > text.len() || !text.is_char_boundary(position) {
        return Context::General;
    }

    let before = text[..position].trim_end();
    if before.ends_with('.') && !before.ends_with("..") {
        return Context::Method;
    }

    let after = text[word_end(text, position)..].trim_start();
    if after.starts_with('(') {
        return Context::Function;
    }

    if is_statement_start(before) {
        Context::Keyword
    } else {
        Context::General
    }
}

/// `before` is empty or its last non-space character opens or ends a statement.
pub(super) fn is_statement_start(before: &str) -> bool {
    matches!(before.trim_end().chars().last(), None | Some('{' | '}' | ';'))
}
