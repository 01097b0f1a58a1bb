//! Vocabulary registry for the console language.
//!
//! Every correctable identifier is tagged with an explicit [`Category`]. The
//! registry keeps three disjoint groups (keywords, built-in functions, methods)
//! plus a separate set of reserved console command names that are never
//! suggested or corrected.
//!
//! Membership tests are case-sensitive; [`Vocabulary::is_valid_ignore_case`]
//! is the lookup used by correction logic so that `Agar` counts as `agar`.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, LazyLock};

use smallvec::SmallVec;

use super::types::Context;

/// Statement and structural keywords.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "agar", "nahi_to", "ya_phir", "jabtak", "liye", "karo", "karya", "vapas", "break",
    "continue", "class", "banao", "ye", "super", "extends", "new", "try", "catch", "finally",
    "throw", "lambda", "se", "tak", "mein", "ke", "sach", "jhooth", "khaali", "aur", "ya",
    "nahi", "case", "default", "static", "import_karo", "as", "in", "lo",
];

/// Built-in functions, called as `name(...)`.
pub const DEFAULT_BUILTINS: &[&str] = &[
    "likho", "input_lo", "float_lo", "int_lo", "batao", "samjhao", "samjhao_on",
    "samjhao_off", "time_machine_on", "time_machine_off", "time_machine_status", "peeche",
    "aage", "timeline", "math_absolute", "math_square", "math_power", "math_random",
    "math_upar", "math_gol", "math_sin", "math_cos", "math_tan", "math_log", "math_exp",
    "type_of", "prakar", "string_hai", "array_hai", "int_hai", "float_hai", "bool_hai",
    "obj_hai", "string_bnao", "float_bnao", "int_bnao", "bool_bnao", "lambai", "range",
    "repeatkr", "file_padho", "file_likho", "file_append", "file_hai", "file_delete",
    "file_copy", "file_move", "file_size", "dir_banao", "dir_list", "json_stringify",
    "json_parse", "time_now", "time_sleep",
];

pub const DEFAULT_ARRAY_METHODS: &[&str] = &[
    "push", "pop", "shift", "unshift", "map", "filter", "reduce", "dalo", "jodo", "nikalo",
    "hatao", "badlo",
];

pub const DEFAULT_STRING_METHODS: &[&str] = &[
    "upper", "lower", "trim", "split", "replace", "contains", "starts_with", "ends_with",
];

pub const DEFAULT_OBJECT_METHODS: &[&str] = &["keys", "values", "items", "has_key", "get", "remove"];

/// Console commands handled by the REPL itself.
pub const DEFAULT_RESERVED_COMMANDS: &[&str] = &[
    "exit", "quit", "help", "clear", "vars", "history", "qhelp", "credits", "copyright",
];

/// Category tag of a correctable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Builtin,
    ArrayMethod,
    StringMethod,
    ObjectMethod,
}

impl Category {
    pub fn is_method(self) -> bool {
        matches!(
            self,
            Category::ArrayMethod | Category::StringMethod | Category::ObjectMethod
        )
    }

    /// Disjointness group: all method subcategories share one group.
    fn group(self) -> u8 {
        match self {
            Category::Keyword => 0,
            Category::Builtin => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Keyword => "keyword",
            Category::Builtin => "builtin function",
            Category::ArrayMethod => "array method",
            Category::StringMethod => "string method",
            Category::ObjectMethod => "object method",
        };
        f.write_str(name)
    }
}

/// Errors raised while assembling a [`Vocabulary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// A word was registered in two disjoint groups
    Conflict {
        word: String,
        existing: Category,
        requested: Category,
    },
    /// A reserved command name is also a correctable word
    ReservedConflict { word: String, category: Category },
    /// Empty strings cannot be identifiers
    EmptyWord(Category),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyError::Conflict {
                word,
                existing,
                requested,
            } => write!(
                f,
                "'{}' is already a {} and cannot also be a {}",
                word, existing, requested
            ),
            VocabularyError::ReservedConflict { word, category } => {
                write!(f, "reserved command '{}' is also a {}", word, category)
            }
            VocabularyError::EmptyWord(category) => write!(f, "empty {} name", category),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// Immutable partition of the language's identifiers.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tags: HashMap<String, SmallVec<[Category; 2]>>,
    /// Lower-cased forms of every correctable word
    folded: HashSet<String>,
    reserved: HashSet<String>,
    keywords: Vec<String>,
    builtins: Vec<String>,
    methods: Vec<String>,
    all: Vec<String>,
}

/// Shared default vocabulary for the console language
static STANDARD: LazyLock<Arc<Vocabulary>> = LazyLock::new(|| {
    Arc::new(
        VocabularyBuilder::standard()
            .build()
            .expect("default word lists form a valid partition"),
    )
});

impl Vocabulary {
    /// The default vocabulary, including the default console commands.
    pub fn standard() -> Arc<Vocabulary> {
        Arc::clone(&STANDARD)
    }

    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::new()
    }

    /// Category tags of `word` (case-sensitive). Empty for unknown words.
    pub fn categories(&self, word: &str) -> &[Category] {
        self.tags.get(word).map(|tags| tags.as_slice()).unwrap_or(&[])
    }

    /// Primary category of `word`: the first tag it was registered with.
    pub fn category_of(&self, word: &str) -> Option<Category> {
        self.categories(word).first().copied()
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.categories(word).contains(&Category::Keyword)
    }

    pub fn is_builtin(&self, word: &str) -> bool {
        self.categories(word).contains(&Category::Builtin)
    }

    pub fn is_method(&self, word: &str) -> bool {
        self.categories(word).iter().any(|c| c.is_method())
    }

    pub fn is_array_method(&self, word: &str) -> bool {
        self.categories(word).contains(&Category::ArrayMethod)
    }

    pub fn is_string_method(&self, word: &str) -> bool {
        self.categories(word).contains(&Category::StringMethod)
    }

    pub fn is_object_method(&self, word: &str) -> bool {
        self.categories(word).contains(&Category::ObjectMethod)
    }

    /// Case-sensitive membership in any correctable category.
    pub fn is_valid(&self, word: &str) -> bool {
        self.tags.contains_key(word)
    }

    /// Case-insensitive membership, used to decide whether a token needs fixing.
    pub fn is_valid_ignore_case(&self, word: &str) -> bool {
        self.tags.contains_key(word) || self.folded.contains(&word.to_lowercase())
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    /// True if `word` must never be corrected.
    ///
    /// Reserved commands are checked first and need no category lookup.
    pub fn is_exempt(&self, word: &str) -> bool {
        self.is_reserved(word) || self.is_valid_ignore_case(word)
    }

    /// Candidate pool for a context, in registration order.
    pub fn pool(&self, context: Context) -> &[String] {
        match context {
            Context::Method => &self.methods,
            Context::Function => &self.builtins,
            Context::Keyword => &self.keywords,
            Context::General => &self.all,
        }
    }

    pub fn reserved_commands(&self) -> impl Iterator<Item = &str> {
        self.reserved.iter().map(String::as_str)
    }

    /// Number of distinct correctable words.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Collects word lists and validates them into a [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    words: Vec<(String, Category)>,
    reserved: Vec<String>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the default word lists and console commands.
    pub fn standard() -> Self {
        Self::new()
            .words(Category::Keyword, DEFAULT_KEYWORDS.iter().copied())
            .words(Category::Builtin, DEFAULT_BUILTINS.iter().copied())
            .words(Category::ArrayMethod, DEFAULT_ARRAY_METHODS.iter().copied())
            .words(Category::StringMethod, DEFAULT_STRING_METHODS.iter().copied())
            .words(Category::ObjectMethod, DEFAULT_OBJECT_METHODS.iter().copied())
            .reserved(DEFAULT_RESERVED_COMMANDS.iter().copied())
    }

    pub fn word(mut self, category: Category, word: impl Into<String>) -> Self {
        self.words.push((word.into(), category));
        self
    }

    pub fn words<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words
            .extend(words.into_iter().map(|w| (w.into(), category)));
        self
    }

    pub fn reserved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(names.into_iter().map(Into::into));
        self
    }

    /// Drop every reserved name registered so far.
    pub fn clear_reserved(mut self) -> Self {
        self.reserved.clear();
        self
    }

    pub fn build(self) -> Result<Vocabulary, VocabularyError> {
        let mut vocab = Vocabulary {
            tags: HashMap::with_capacity(self.words.len()),
            folded: HashSet::with_capacity(self.words.len()),
            reserved: HashSet::with_capacity(self.reserved.len()),
            keywords: Vec::new(),
            builtins: Vec::new(),
            methods: Vec::new(),
            all: Vec::new(),
        };

        for (word, category) in self.words {
            if word.is_empty() {
                return Err(VocabularyError::EmptyWord(category));
            }

            let tags = vocab.tags.entry(word.clone()).or_default();
            if tags.contains(&category) {
                continue;
            }
            if let Some(&existing) = tags.iter().find(|c| c.group() != category.group()) {
                return Err(VocabularyError::Conflict {
                    word,
                    existing,
                    requested: category,
                });
            }

            let first_tag = tags.is_empty();
            let first_method_tag = category.is_method() && !tags.iter().any(|c| c.is_method());
            tags.push(category);

            match category {
                Category::Keyword => vocab.keywords.push(word.clone()),
                Category::Builtin => vocab.builtins.push(word.clone()),
                _ if first_method_tag => vocab.methods.push(word.clone()),
                _ => {}
            }
            if first_tag {
                vocab.folded.insert(word.to_lowercase());
                vocab.all.push(word);
            }
        }

        for name in self.reserved {
            if let Some(&category) = vocab.tags.get(&name).and_then(|tags| tags.first()) {
                return Err(VocabularyError::ReservedConflict {
                    word: name,
                    category,
                });
            }
            vocab.reserved.insert(name);
        }

        Ok(vocab)
    }
}
