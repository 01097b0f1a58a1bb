//! typofix - Context-Aware Typo Correction
//!
//! This library detects misspelled identifiers (keywords, built-in function
//! names and method names) in console input or source text of a small
//! scripting language and proposes, or applies, corrected spellings.
//!
//! # Architecture
//!
//! The correction pipeline consists of four stages:
//!
//! 1. **Extraction** (`correction::extract`)
//!    - Single left-to-right scan tracking string-literal state
//!    - Reports method calls, function calls and statement keywords
//!    - Classifies each site from local text only (`classify_at`)
//!
//! 2. **Ranking** (`correction::CandidateRanker`)
//!    - Restricts candidates to the context's vocabulary pool
//!    - Fuzzy (similarity ratio) and phonetic candidate discovery
//!    - Confidence scoring with a floor, memoized in an LRU cache
//!
//! 3. **Rewriting** (`correction::apply_fixes`)
//!    - Span-exact replacements applied back to front
//!    - Everything outside corrected call sites is left byte-for-byte intact
//!
//! 4. **Facade** (`correction::Corrector`)
//!    - `suggest_correction`, `suggest_with_confidence`, `auto_fix_code`,
//!      `clear_cache`
//!
//! # Example
//!
//! ```rust
//! use typofix::{Context, Corrector};
//!
//! let corrector = Corrector::new();
//!
//! let fixed = corrector.auto_fix_code(r#"likh("namaste")"#);
//! assert_eq!(fixed.text, r#"likho("namaste")"#);
//! assert_eq!(fixed.fixes[0].original, "likh");
//!
//! assert_eq!(corrector.suggest_correction("pus", Context::Method), Some("push".to_string()));
//! assert_eq!(corrector.suggest_correction("Agar", Context::General), None);
//! ```
//!
//! # Exemptions
//!
//! - **Reserved commands**: console commands (`help`, `exit`, ...) are never
//!   corrected, and input led by one is passed through untouched
//! - **Valid words**: any casing of a vocabulary word is already correct
//! - **String literals**: identifiers inside quotes are never extracted

pub mod config;
pub mod correction;

pub use config::{ConfigError, CorrectorConfig};
pub use correction::{
    AutoFix, Category, Context, Corrector, FixRecord, Occurrence, Suggestion, SuggestionMethod,
    Vocabulary, VocabularyBuilder, VocabularyError,
};
