//! Public entry points of the correction engine.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::{ConfigError, CorrectorConfig};

use super::extractor::extract;
use super::ranker::{CacheStats, CandidateRanker};
use super::rewriter::{apply_fixes, PendingFix};
use super::types::{AutoFix, Context, Suggestion};
use super::vocabulary::Vocabulary;

/// Typo corrector for console input and source files.
///
/// Holds the vocabulary, the candidate ranker and its cache. A `Corrector`
/// is `Send + Sync`; the rank cache is the only mutable state and is guarded
/// internally, so one instance can serve many threads.
pub struct Corrector {
    vocabulary: Arc<Vocabulary>,
    ranker: CandidateRanker,
    config: CorrectorConfig,
}

impl Corrector {
    /// Corrector over the default vocabulary with default settings.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard(), CorrectorConfig::default())
    }

    /// Corrector built from a configuration, including its extra vocabulary.
    pub fn from_config(config: CorrectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let vocabulary = if config.uses_standard_vocabulary() {
            Vocabulary::standard()
        } else {
            Arc::new(config.build_vocabulary()?)
        };
        Ok(Self::with_vocabulary(vocabulary, config))
    }

    /// Corrector over a caller-supplied vocabulary.
    ///
    /// The vocabulary is used as is; the `vocabulary` and
    /// `reserved_commands` sections of `config` are ignored.
    pub fn with_vocabulary(vocabulary: Arc<Vocabulary>, config: CorrectorConfig) -> Self {
        let ranker = CandidateRanker::with_settings(
            Arc::clone(&vocabulary),
            config.similarity_cutoff,
            config.min_confidence,
            config.cache_capacity(),
        );
        Self {
            vocabulary,
            ranker,
            config,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Ranked suggestions for `word`, best first.
    ///
    /// Empty when the word is a reserved command, already valid in any case,
    /// or nothing clears the confidence floor.
    pub fn suggest_with_confidence(
        &self,
        word: &str,
        context: Context,
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        if self.vocabulary.is_exempt(word) {
            trace!(word, "exempt from correction");
            return Vec::new();
        }
        self.ranker.rank(word, context, max_suggestions)
    }

    /// The single best correction for `word`, if any.
    pub fn suggest_correction(&self, word: &str, context: Context) -> Option<String> {
        self.suggest_with_confidence(word, context, self.config.max_suggestions)
            .into_iter()
            .next()
            .map(|s| s.word)
    }

    /// Detect and rewrite misspelled identifiers in `text`.
    ///
    /// Console meta commands (text starting with a configured marker) and
    /// input led by a reserved command name are returned unchanged.
    pub fn auto_fix_code(&self, text: &str) -> AutoFix {
        if self.defers_to_console(text) {
            debug!("input is a console command, not correcting");
            return AutoFix::unchanged(text);
        }

        let pending: Vec<PendingFix> = extract(text)
            .into_iter()
            .filter_map(|occurrence| {
                let suggestion = self.suggest_correction(&occurrence.word, occurrence.context)?;
                trace!(
                    word = %occurrence.word,
                    %suggestion,
                    context = %occurrence.context,
                    "accepted correction"
                );
                Some(PendingFix::new(occurrence, suggestion))
            })
            .collect();

        if pending.is_empty() {
            return AutoFix::unchanged(text);
        }

        let result = apply_fixes(text, &pending, &self.vocabulary);
        for fix in &result.fixes {
            debug!(
                original = %fix.original,
                suggested = %fix.suggested,
                context = %fix.context,
                "applied fix"
            );
        }
        result
    }

    /// Run [`Corrector::auto_fix_code`] over many texts in parallel.
    ///
    /// Results are returned in input order; the rank cache is shared.
    pub fn auto_fix_batch<S>(&self, texts: &[S]) -> Vec<AutoFix>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.auto_fix_code(text.as_ref()))
            .collect()
    }

    /// Empty the rank cache.
    pub fn clear_cache(&self) {
        self.ranker.clear_cache();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.ranker.cache_stats()
    }

    /// Whether `text` belongs to the console rather than the language.
    fn defers_to_console(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if self.config.is_meta_command(trimmed) {
            return true;
        }
        let head = trimmed.split('(').next().unwrap_or("");
        let first_word = head.split_whitespace().next().unwrap_or("");
        !first_word.is_empty() && self.vocabulary.is_reserved(first_word)
    }
}

impl Default for Corrector {
    fn default() -> Self {
        Self::new()
    }
}
