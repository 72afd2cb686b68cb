use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::types::EntityId;

/// Prefix that marks an alias as a regular expression in catalog files
pub const REGEX_PREFIX: &str = "regex:";

/// Upper bound on the compiled size of any user-supplied pattern
pub const REGEX_SIZE_LIMIT: usize = 1 << 20;

#[derive(Error, Debug)]
pub enum AliasError {
    #[error("Invalid regex alias '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// An alternate name for an entity
///
/// Aliases are either literal text, matched word by word after normalization,
/// or a case-insensitive pattern evaluated against the raw target text.
#[derive(Debug, Clone)]
pub enum Alias {
    Literal(String),
    Pattern(Regex),
}

impl Alias {
    /// Parse an alias from its catalog form.
    ///
    /// Text starting with `regex:` compiles the remainder as a case-insensitive
    /// pattern; everything else is kept as literal text.
    ///
    /// # Errors
    ///
    /// Returns `AliasError::Compile` if a `regex:` alias is not a valid pattern.
    pub fn parse(raw: &str) -> Result<Self, AliasError> {
        match raw.strip_prefix(REGEX_PREFIX) {
            Some(pattern) => compile_alias_pattern(pattern).map(Self::Pattern),
            None => Ok(Self::Literal(raw.to_string())),
        }
    }

    /// The catalog form of this alias, with the `regex:` prefix restored for patterns
    #[must_use]
    pub fn as_source(&self) -> Cow<'_, str> {
        match self {
            Self::Literal(text) => Cow::Borrowed(text),
            Self::Pattern(regex) => Cow::Owned(format!("{REGEX_PREFIX}{}", regex.as_str())),
        }
    }

    #[must_use]
    pub fn as_input(&self) -> MatchInput<'_> {
        match self {
            Self::Literal(text) => MatchInput::Text(text),
            Self::Pattern(regex) => MatchInput::Pattern(regex),
        }
    }

    #[must_use]
    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}

impl PartialEq for Alias {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Alias {}

fn compile_alias_pattern(pattern: &str) -> Result<Regex, AliasError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| AliasError::Compile {
            pattern: pattern.to_string(),
            source,
        })
}

/// One string a matcher tests against the target text
#[derive(Debug, Clone, Copy)]
pub enum MatchInput<'a> {
    /// Literal text, compared as a contiguous word sequence
    Text(&'a str),
    /// Case-insensitive pattern, run against the unmodified target
    Pattern(&'a Regex),
}

/// A known entity that can be found in a path or title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMatchableItem", into = "RawMatchableItem")]
pub struct MatchableItem {
    pub id: EntityId,
    pub name: String,
    pub aliases: Vec<Alias>,
}

impl MatchableItem {
    /// Build an item from catalog-form aliases.
    ///
    /// Aliases whose pattern does not compile are dropped with a warning so a
    /// single bad alias never prevents the rest of the item from matching.
    pub fn new<I, S>(id: impl Into<EntityId>, name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = id.into();
        let aliases = aliases
            .into_iter()
            .filter_map(|raw| match Alias::parse(raw.as_ref()) {
                Ok(alias) => Some(alias),
                Err(e) => {
                    warn!(entity = %id, error = %e, "Skipping alias that failed to compile");
                    None
                }
            })
            .collect();

        Self {
            id,
            name: name.into(),
            aliases,
        }
    }

    /// The conventional match inputs: the name followed by every alias
    #[must_use]
    pub fn inputs(&self) -> Vec<MatchInput<'_>> {
        std::iter::once(MatchInput::Text(self.name.as_str()))
            .chain(self.aliases.iter().map(Alias::as_input))
            .collect()
    }
}

/// Serialized shape of a `MatchableItem`, with aliases in catalog form
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawMatchableItem {
    id: EntityId,
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
}

impl From<RawMatchableItem> for MatchableItem {
    fn from(raw: RawMatchableItem) -> Self {
        Self::new(raw.id, raw.name, raw.aliases)
    }
}

impl From<MatchableItem> for RawMatchableItem {
    fn from(item: MatchableItem) -> Self {
        Self {
            aliases: item.aliases.iter().map(|a| a.as_source().into_owned()).collect(),
            id: item.id,
            name: item.name,
        }
    }
}
