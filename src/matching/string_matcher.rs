use regex::Regex;

use crate::matching::config::{compile_pattern, ConfigError, StringMatcherOptions};
use crate::matching::matcher::{Matcher, TokenStream};
use crate::matching::normalize::{normalize, split_words, strip, WORD_BOUNDARY_PUNCTUATION};

/// Matcher for natural free-text titles.
///
/// Text is normalized, every character outside the allow-list is turned into a
/// space, and the remainder is split into a single run of words. Whitespace and
/// the bracketing, comma and slash punctuation end a word; apostrophes and
/// hyphens stay inside it.
#[derive(Debug, Clone)]
pub struct StringMatcher {
    options: StringMatcherOptions,
    strip_pattern: Option<Regex>,
}

impl StringMatcher {
    /// # Errors
    ///
    /// Returns `ConfigError` if the strip pattern does not compile or matches
    /// the empty string. An empty strip pattern disables stripping.
    pub fn new(options: StringMatcherOptions) -> Result<Self, ConfigError> {
        let strip_pattern = if options.strip_pattern.is_empty() {
            None
        } else {
            Some(compile_pattern("strip", &options.strip_pattern)?)
        };

        Ok(Self {
            options,
            strip_pattern,
        })
    }

    #[must_use]
    pub fn options(&self) -> &StringMatcherOptions {
        &self.options
    }
}

impl Matcher for StringMatcher {
    fn tokenize(&self, text: &str) -> TokenStream {
        let normalized = normalize(text);
        let stripped = match &self.strip_pattern {
            Some(pattern) => strip(&normalized, pattern),
            None => normalized,
        };
        TokenStream::single(split_words(&stripped, WORD_BOUNDARY_PUNCTUATION))
    }

    fn ignore_single_names(&self) -> bool {
        self.options.ignore_single_names
    }

    fn sort_by_longest_match(&self) -> bool {
        false
    }
}
