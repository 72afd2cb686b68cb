//! Matcher selection and options.
//!
//! The configuration is read once at start-up and picks exactly one matching
//! strategy. Its JSON form uses the same camelCase keys as the options
//! documented for operators:
//!
//! ```json
//! {
//!   "type": "word",
//!   "options": {
//!     "ignoreSingleNames": false,
//!     "wordSeparators": ["[-_]"],
//!     "groupSeparators": ["[\\s',()\\[\\]{}*\\.]"],
//!     "sortByLongestMatch": true
//!   }
//! }
//! ```

use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::item::REGEX_SIZE_LIMIT;
use crate::matching::normalize::DEFAULT_STRIP_PATTERN;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {field} pattern '{pattern}': {source}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("The {field} pattern '{pattern}' matches the empty string")]
    MatchesEmpty {
        field: &'static str,
        pattern: String,
    },

    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Default word separators: hyphen and underscore
pub const DEFAULT_WORD_SEPARATORS: &[&str] = &["[-_]"];

/// Default group separators: whitespace, quotes, brackets, asterisk and dot
pub const DEFAULT_GROUP_SEPARATORS: &[&str] = &[r"[\s',()\[\]{}*\.]"];

/// Default path separators: forward and back slash
pub const DEFAULT_FILEPATH_SEPARATORS: &[&str] = &[r"[/\\]"];

/// Which matcher to run, with its options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum MatcherConfig {
    /// Character-strip tokenizer, suited to natural free-text titles
    String(StringMatcherOptions),
    /// Separator-rule tokenizer, suited to dotted or underscored release names
    Word(WordMatcherOptions),
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::Word(WordMatcherOptions::default())
    }
}

impl MatcherConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed JSON or unknown matcher types.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export configuration to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn ignore_single_names(&self) -> bool {
        match self {
            Self::String(opts) => opts.ignore_single_names,
            Self::Word(opts) => opts.ignore_single_names,
        }
    }
}

/// Options for the string matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringMatcherOptions {
    /// Never match a name or alias that is a single word
    pub ignore_single_names: bool,
    /// Regex character class of characters to strip; its complement is the allow-list
    pub strip_pattern: String,
}

impl Default for StringMatcherOptions {
    fn default() -> Self {
        Self {
            ignore_single_names: true,
            strip_pattern: DEFAULT_STRIP_PATTERN.to_string(),
        }
    }
}

/// Options for the word matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordMatcherOptions {
    /// Never match a name or alias that is a single word
    pub ignore_single_names: bool,
    /// Patterns splitting text into words
    pub word_separators: Vec<String>,
    /// Patterns for enclosing punctuation stripped before word splitting
    pub group_separators: Vec<String>,
    /// Order results by descending matched word count
    pub sort_by_longest_match: bool,
    /// Patterns splitting a path into segments; a match never spans two segments
    pub filepath_separators: Vec<String>,
    /// Treat lower-to-upper case transitions as word boundaries
    pub camel_case_words: bool,
}

impl Default for WordMatcherOptions {
    fn default() -> Self {
        Self {
            ignore_single_names: false,
            word_separators: to_owned_patterns(DEFAULT_WORD_SEPARATORS),
            group_separators: to_owned_patterns(DEFAULT_GROUP_SEPARATORS),
            sort_by_longest_match: true,
            filepath_separators: to_owned_patterns(DEFAULT_FILEPATH_SEPARATORS),
            camel_case_words: false,
        }
    }
}

fn to_owned_patterns(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_string()).collect()
}

/// Compile one configured pattern.
///
/// Patterns that can match the empty string are rejected: replacing empty
/// matches would put a boundary between every character.
pub(crate) fn compile_pattern(field: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    let regex = RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            field,
            pattern: pattern.to_string(),
            source,
        })?;

    if regex.is_match("") {
        return Err(ConfigError::MatchesEmpty {
            field,
            pattern: pattern.to_string(),
        });
    }

    Ok(regex)
}

/// Compile a list of pattern fragments into one alternation.
///
/// Each fragment is checked on its own first so errors name the bad fragment.
/// Returns `None` for an empty list.
pub(crate) fn compile_alternation(
    field: &'static str,
    fragments: &[String],
) -> Result<Option<Regex>, ConfigError> {
    if fragments.is_empty() {
        return Ok(None);
    }

    for fragment in fragments {
        compile_pattern(field, fragment)?;
    }

    let joined = fragments
        .iter()
        .map(|f| format!("(?:{f})"))
        .collect::<Vec<_>>()
        .join("|");

    compile_pattern(field, &joined).map(Some)
}
