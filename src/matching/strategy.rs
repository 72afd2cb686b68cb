use crate::matching::config::{ConfigError, MatcherConfig};
use crate::matching::matcher::{Matcher, TokenStream};
use crate::matching::string_matcher::StringMatcher;
use crate::matching::word_matcher::WordMatcher;

/// The matcher selected by configuration.
///
/// Built once at start-up and passed by reference to the extractors.
#[derive(Debug, Clone)]
pub enum MatchStrategy {
    String(StringMatcher),
    Word(WordMatcher),
}

impl MatchStrategy {
    /// Compile the matcher described by `config`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any configured pattern is invalid.
    pub fn from_config(config: &MatcherConfig) -> Result<Self, ConfigError> {
        match config {
            MatcherConfig::String(options) => StringMatcher::new(options.clone()).map(Self::String),
            MatcherConfig::Word(options) => WordMatcher::new(options.clone()).map(Self::Word),
        }
    }

    /// Short name of the active strategy
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Word(_) => "word",
        }
    }

    /// The configuration this strategy was built from
    #[must_use]
    pub fn config(&self) -> MatcherConfig {
        match self {
            Self::String(m) => MatcherConfig::String(m.options().clone()),
            Self::Word(m) => MatcherConfig::Word(m.options().clone()),
        }
    }
}

impl Matcher for MatchStrategy {
    fn tokenize(&self, text: &str) -> TokenStream {
        match self {
            Self::String(m) => m.tokenize(text),
            Self::Word(m) => m.tokenize(text),
        }
    }

    fn ignore_single_names(&self) -> bool {
        match self {
            Self::String(m) => m.ignore_single_names(),
            Self::Word(m) => m.ignore_single_names(),
        }
    }

    fn sort_by_longest_match(&self) -> bool {
        match self {
            Self::String(m) => m.sort_by_longest_match(),
            Self::Word(m) => m.sort_by_longest_match(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::MatchableItem;
    use crate::matching::config::{StringMatcherOptions, WordMatcherOptions};

    #[test]
    fn test_from_config_selects_variant() {
        let string = MatchStrategy::from_config(&MatcherConfig::String(StringMatcherOptions::default())).unwrap();
        assert_eq!(string.name(), "string");
        assert!(string.ignore_single_names());
        assert!(!string.sort_by_longest_match());

        let word = MatchStrategy::from_config(&MatcherConfig::default()).unwrap();
        assert_eq!(word.name(), "word");
        assert!(!word.ignore_single_names());
        assert!(word.sort_by_longest_match());
    }

    #[test]
    fn test_from_config_propagates_pattern_errors() {
        let config = MatcherConfig::Word(WordMatcherOptions {
            word_separators: vec!["(".to_string()],
            ..WordMatcherOptions::default()
        });
        assert!(MatchStrategy::from_config(&config).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = MatcherConfig::String(StringMatcherOptions {
            ignore_single_names: false,
            ..StringMatcherOptions::default()
        });
        let strategy = MatchStrategy::from_config(&config).unwrap();
        assert_eq!(strategy.config(), config);
    }

    #[test]
    fn test_strategies_tokenize_differently() {
        let string = MatchStrategy::from_config(&MatcherConfig::String(StringMatcherOptions {
            ignore_single_names: false,
            ..StringMatcherOptions::default()
        }))
        .unwrap();
        let word = MatchStrategy::from_config(&MatcherConfig::default()).unwrap();

        // The string matcher keeps hyphens inside words, the word matcher splits on them
        let kali = MatchableItem::new("k", "Kali Rose", Vec::<String>::new());
        assert!(!string.is_matching_item(&kali, "kali-rose", MatchableItem::inputs));
        assert!(word.is_matching_item(&kali, "kali-rose", MatchableItem::inputs));
    }

    #[test]
    fn test_strategy_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MatchStrategy>();
    }
}
