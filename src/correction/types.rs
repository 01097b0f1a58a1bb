//! Types shared across the correction pipeline.

use std::fmt;
use std::ops::Range;

/// Syntactic role of an identifier occurrence, inferred from local text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Context {
    /// `receiver.name(` - candidates come from the method names
    Method,
    /// `name(` - candidates come from the built-in functions
    Function,
    /// Statement position (start of text, after `{`, `}` or `;`)
    Keyword,
    /// Anything else - candidates come from the whole vocabulary
    #[default]
    General,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Method => write!(f, "method"),
            Context::Function => write!(f, "function"),
            Context::Keyword => write!(f, "keyword"),
            Context::General => write!(f, "general"),
        }
    }
}

/// How a candidate was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionMethod {
    /// Similarity ratio above the cutoff
    Standard,
    /// Only the phonetic forms matched
    Phonetic,
}

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested vocabulary word
    pub word: String,
    /// Confidence in `0..=100`
    pub confidence: u8,
    /// Discovery method
    pub method: SuggestionMethod,
}

/// One detected reference site in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The identifier as written
    pub word: String,
    /// Detected syntactic role
    pub context: Context,
    /// Byte offset of the identifier's first character
    pub offset: usize,
    /// Byte range of the matched form (e.g. `.pus (` or `prnt(`)
    pub span: Range<usize>,
    /// Source text covered by `span`
    pub matched_text: String,
}

/// An accepted correction as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixRecord {
    pub original: String,
    pub suggested: String,
    pub context: Context,
}

/// Result of running the full pipeline over one text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutoFix {
    /// Corrected copy of the input
    pub text: String,
    /// Deduplicated fixes, in first-discovered order
    pub fixes: Vec<FixRecord>,
}

impl AutoFix {
    /// The input passed through untouched.
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fixes: Vec::new(),
        }
    }

    pub fn is_changed(&self) -> bool {
        !self.fixes.is_empty()
    }
}
