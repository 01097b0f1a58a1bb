//! Corrector configuration (`typofix.toml`).
//!
//! ```toml
//! max_suggestions = 3
//! similarity_cutoff = 0.5
//! min_confidence = 60
//! cache_capacity = 1024
//! meta_markers = ["!", "."]
//! reserved_commands = ["exit", "quit", "help"]
//!
//! [vocabulary]
//! builtins = ["my_helper"]
//! array_methods = ["flatten"]
//! ```
//!
//! Every field is optional. `reserved_commands`, when present, replaces the
//! default console command set; `[vocabulary]` words are added to the
//! default word lists.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::correction::ranker::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_MIN_CONFIDENCE, DEFAULT_SIMILARITY_CUTOFF,
};
use crate::correction::vocabulary::{Category, Vocabulary, VocabularyBuilder, VocabularyError};

/// File name looked up in the user config directory
pub const CONFIG_FILE_NAME: &str = "typofix.toml";

/// Environment override for the rank cache capacity
pub const CACHE_SIZE_ENV: &str = "TYPOFIX_RANK_CACHE_SIZE";

pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Errors raised while loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// Config file is not valid TOML for [`CorrectorConfig`]
    Parse(toml::de::Error),
    /// A field holds an out-of-range value
    Invalid { field: &'static str, reason: String },
    /// Extra vocabulary words break the category partition
    Vocabulary(VocabularyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::Vocabulary(e) => write!(f, "Invalid vocabulary: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Vocabulary(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<VocabularyError> for ConfigError {
    fn from(e: VocabularyError) -> Self {
        ConfigError::Vocabulary(e)
    }
}

/// Extra words merged into the default vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub builtins: Vec<String>,
    #[serde(default)]
    pub array_methods: Vec<String>,
    #[serde(default)]
    pub string_methods: Vec<String>,
    #[serde(default)]
    pub object_methods: Vec<String>,
}

impl VocabularyConfig {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.builtins.is_empty()
            && self.array_methods.is_empty()
            && self.string_methods.is_empty()
            && self.object_methods.is_empty()
    }
}

/// Tunables for the correction pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorrectorConfig {
    /// Suggestions ranked per token during auto-fix
    pub max_suggestions: usize,
    /// Minimum similarity ratio for a fuzzy candidate
    pub similarity_cutoff: f64,
    /// Minimum confidence for a candidate to be kept
    pub min_confidence: u8,
    /// Rank cache capacity. Falls back to `TYPOFIX_RANK_CACHE_SIZE`, then 1024.
    pub cache_capacity: Option<usize>,
    /// Leading characters that mark console meta commands
    pub meta_markers: Vec<char>,
    /// Replaces the default console command set when present
    pub reserved_commands: Option<Vec<String>>,
    pub vocabulary: VocabularyConfig,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            similarity_cutoff: DEFAULT_SIMILARITY_CUTOFF,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            cache_capacity: None,
            meta_markers: vec!['!', '.'],
            reserved_commands: None,
            vocabulary: VocabularyConfig::default(),
        }
    }
}

impl CorrectorConfig {
    /// Parse and validate configuration from TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CorrectorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded corrector config");
        Self::from_toml_str(&content)
    }

    /// Location of `typofix.toml` in the user config directory, if known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("typofix").join(CONFIG_FILE_NAME))
    }

    /// Load the user config if one exists, otherwise defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::Invalid {
                field: "max_suggestions",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.similarity_cutoff) {
            return Err(ConfigError::Invalid {
                field: "similarity_cutoff",
                reason: format!("{} is outside 0.0..=1.0", self.similarity_cutoff),
            });
        }
        if self.min_confidence > 100 {
            return Err(ConfigError::Invalid {
                field: "min_confidence",
                reason: format!("{} is above 100", self.min_confidence),
            });
        }
        if self.cache_capacity == Some(0) {
            return Err(ConfigError::Invalid {
                field: "cache_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Effective rank cache capacity.
    pub fn cache_capacity(&self) -> NonZeroUsize {
        self.cache_capacity
            .and_then(NonZeroUsize::new)
            .or_else(|| {
                std::env::var(CACHE_SIZE_ENV)
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .and_then(NonZeroUsize::new)
            })
            .unwrap_or(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).expect("1024 is non-zero"))
    }

    /// Whether the trimmed input starts with a meta-command marker.
    pub fn is_meta_command(&self, trimmed: &str) -> bool {
        trimmed
            .chars()
            .next()
            .is_some_and(|c| self.meta_markers.contains(&c))
    }

    /// Build the vocabulary described by this configuration.
    pub fn build_vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        let mut builder = VocabularyBuilder::standard();
        if let Some(reserved) = &self.reserved_commands {
            builder = builder.clear_reserved().reserved(reserved.iter().cloned());
        }

        let extra = &self.vocabulary;
        let vocab = builder
            .words(Category::Keyword, extra.keywords.iter().cloned())
            .words(Category::Builtin, extra.builtins.iter().cloned())
            .words(Category::ArrayMethod, extra.array_methods.iter().cloned())
            .words(Category::StringMethod, extra.string_methods.iter().cloned())
            .words(Category::ObjectMethod, extra.object_methods.iter().cloned())
            .build()?;
        Ok(vocab)
    }

    /// True when the default vocabulary can be shared as is.
    pub(crate) fn uses_standard_vocabulary(&self) -> bool {
        self.reserved_commands.is_none() && self.vocabulary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = CorrectorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CorrectorConfig::default());
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.min_confidence, 60);
        assert_eq!(config.similarity_cutoff, 0.5);
    }

    #[test]
    fn test_parse_full_config() {
        let config = CorrectorConfig::from_toml_str(
            r#"
            max_suggestions = 5
            similarity_cutoff = 0.6
            min_confidence = 70
            cache_capacity = 16
            meta_markers = ["!"]
            reserved_commands = ["bye"]

            [vocabulary]
            builtins = ["print"]
            array_methods = ["flatten"]
            "#,
        )
        .unwrap();

        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.cache_capacity().get(), 16);
        assert_eq!(config.meta_markers, vec!['!']);
        assert_eq!(config.reserved_commands, Some(vec!["bye".to_string()]));
        assert_eq!(config.vocabulary.builtins, vec!["print".to_string()]);

        let vocab = config.build_vocabulary().unwrap();
        assert!(vocab.is_builtin("print"));
        assert!(vocab.is_array_method("flatten"));
        assert!(vocab.is_reserved("bye"));
        assert!(!vocab.is_reserved("help"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CorrectorConfig::from_toml_str("max_sugestions = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = CorrectorConfig::from_toml_str("max_suggestions = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_suggestions", .. }));

        let err = CorrectorConfig::from_toml_str("similarity_cutoff = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "similarity_cutoff", .. }));

        let err = CorrectorConfig::from_toml_str("min_confidence = 101").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "min_confidence", .. }));

        let err = CorrectorConfig::from_toml_str("cache_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "cache_capacity", .. }));
    }

    #[test]
    fn test_vocabulary_conflict_reported() {
        let config = CorrectorConfig::from_toml_str(
            r#"
            [vocabulary]
            builtins = ["agar"]
            "#,
        )
        .unwrap();
        let err = config.build_vocabulary().unwrap_err();
        assert!(matches!(err, ConfigError::Vocabulary(VocabularyError::Conflict { .. })));
        assert!(err.to_string().contains("agar"));
    }

    #[test]
    fn test_reserved_command_cannot_be_vocabulary_word() {
        let config = CorrectorConfig::from_toml_str(r#"reserved_commands = ["likho"]"#).unwrap();
        let err = config.build_vocabulary().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Vocabulary(VocabularyError::ReservedConflict { .. })
        ));
    }

    #[test]
    fn test_meta_command_markers() {
        let config = CorrectorConfig::default();
        assert!(config.is_meta_command("!ls"));
        assert!(config.is_meta_command(".load file"));
        assert!(!config.is_meta_command("likho(1)"));
        assert!(!config.is_meta_command(""));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CorrectorConfig::load(Path::new("/nonexistent/typofix.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
