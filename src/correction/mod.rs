//! Context-aware typo correction for console input.
//!
//! Pipeline: text → [`extract`] (using [`classify_at`]) → for each occurrence
//! the [`CandidateRanker`] (using the [`Vocabulary`] and phonetic forms) →
//! [`apply_fixes`]. [`Corrector`] wires the stages together.
//!
//! **Scoring**: candidates come from the context's vocabulary pool. Fuzzy
//! candidates need a similarity ratio of at least 0.5; phonetic candidates
//! share the token's normalized sound form. Confidence starts from the
//! scaled ratio, gains up to +15 for a phonetic match and +10 for a shared
//! three-character prefix, and must reach 60 to be suggested.
//!
//! **Exemptions**: reserved console commands and words already in the
//! vocabulary (any casing) are never ranked or rewritten. Identifiers inside
//! string literals are never extracted.

mod context;
mod corrector;
mod extractor;
mod phonetic;
pub mod ranker;
mod rewriter;
mod similarity;
mod types;
pub mod vocabulary;


// Re-export main types
pub use corrector::Corrector;
pub use ranker::{confidence, CacheStats, CandidateRanker};
pub use types::{AutoFix, Context, FixRecord, Occurrence, Suggestion, SuggestionMethod};
pub use vocabulary::{Category, Vocabulary, VocabularyBuilder, VocabularyError};

// Re-export pipeline stages for testing and external use
pub use context::classify_at;
pub use extractor::{extract, KEYWORD_MARKERS};
pub use phonetic::{normalize, sounds_alike};
pub use rewriter::{apply_fixes, PendingFix};
pub use similarity::{close_matches, ratio};
