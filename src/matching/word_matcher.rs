use std::borrow::Cow;

use regex::Regex;

use crate::matching::config::{compile_alternation, ConfigError, WordMatcherOptions};
use crate::matching::matcher::{Matcher, TokenStream};
use crate::matching::normalize::{normalize, split_camel_case, words};

/// Matcher for release-style file names.
///
/// Paths are split into segments on the filepath separators, then each segment
/// is split into words on the group and word separators:
///
/// ```text
/// "Studio/Jill.Kassidy_[1080p]"  ->  ["studio"] ["jill", "kassidy", "1080p"]
/// ```
#[derive(Debug, Clone)]
pub struct WordMatcher {
    options: WordMatcherOptions,
    word_separators: Option<Regex>,
    group_separators: Option<Regex>,
    filepath_separators: Option<Regex>,
}

impl WordMatcher {
    /// # Errors
    ///
    /// Returns `ConfigError` if any separator fragment does not compile or can
    /// match the empty string.
    pub fn new(options: WordMatcherOptions) -> Result<Self, ConfigError> {
        let word_separators = compile_alternation("word separator", &options.word_separators)?;
        let group_separators = compile_alternation("group separator", &options.group_separators)?;
        let filepath_separators =
            compile_alternation("filepath separator", &options.filepath_separators)?;

        Ok(Self {
            options,
            word_separators,
            group_separators,
            filepath_separators,
        })
    }

    #[must_use]
    pub fn options(&self) -> &WordMatcherOptions {
        &self.options
    }

    fn segment_words(&self, segment: &str) -> Vec<String> {
        let mut text = Cow::Borrowed(segment);
        for separators in [&self.group_separators, &self.word_separators]
            .into_iter()
            .flatten()
        {
            if separators.is_match(&text) {
                text = Cow::Owned(separators.replace_all(&text, " ").into_owned());
            }
        }
        words(&text)
    }
}

impl Matcher for WordMatcher {
    fn tokenize(&self, text: &str) -> TokenStream {
        let text = if self.options.camel_case_words {
            Cow::Owned(split_camel_case(text))
        } else {
            Cow::Borrowed(text)
        };
        let normalized = normalize(&text);

        match &self.filepath_separators {
            Some(separators) => TokenStream::from_segments(
                separators
                    .split(&normalized)
                    .map(|segment| self.segment_words(segment)),
            ),
            None => TokenStream::single(self.segment_words(&normalized)),
        }
    }

    fn ignore_single_names(&self) -> bool {
        self.options.ignore_single_names
    }

    fn sort_by_longest_match(&self) -> bool {
        self.options.sort_by_longest_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::MatchableItem;

    fn matcher() -> WordMatcher {
        WordMatcher::new(WordMatcherOptions::default()).unwrap()
    }

    fn matcher_with(f: impl FnOnce(&mut WordMatcherOptions)) -> WordMatcher {
        let mut options = WordMatcherOptions::default();
        f(&mut options);
        WordMatcher::new(options).unwrap()
    }

    fn tokens(m: &WordMatcher, text: &str) -> Vec<Vec<String>> {
        m.tokenize(text).segments().to_vec()
    }

    fn item(id: &str, name: &str, aliases: &[&str]) -> MatchableItem {
        MatchableItem::new(id, name, aliases)
    }

    #[test]
    fn test_group_separators_stripped() {
        let m = matcher();
        assert_eq!(tokens(&m, "[jill kassidy]"), vec![vec!["jill", "kassidy"]]);
        assert_eq!(tokens(&m, "(Kali Rose)'s scene"), vec![vec!["kali", "rose", "s", "scene"]]);
    }

    #[test]
    fn test_word_separators_split() {
        let m = matcher();
        assert_eq!(
            tokens(&m, "Jill.Kassidy_Swallowed-1080p"),
            vec![vec!["jill", "kassidy", "swallowed", "1080p"]]
        );
    }

    #[test]
    fn test_filepath_segments() {
        let m = matcher();
        assert_eq!(
            tokens(&m, "/media/VIXEN Media Group/BLACKED/scene.mp4"),
            vec![
                vec!["media"],
                vec!["vixen", "media", "group"],
                vec!["blacked"],
                vec!["scene", "mp4"],
            ]
        );
        assert_eq!(tokens(&m, r"C:\Videos\Tushy"), vec![vec!["c:"], vec!["videos"], vec!["tushy"]]);
    }

    #[test]
    fn test_match_never_spans_path_segments() {
        let m = matcher();
        let group = item("g", "Group Blacked", &[]);
        assert!(!m.is_matching_item(&group, "VIXEN Media Group/BLACKED/x.mp4", MatchableItem::inputs));
        assert!(m.is_matching_item(&group, "VIXEN Media Group Blacked.mp4", MatchableItem::inputs));
    }

    #[test]
    fn test_dotted_release_name() {
        let m = matcher();
        let jill = item("a1", "Jill Kassidy", &[]);
        assert!(m.is_matching_item(&jill, "Blacked.18.05.20.Jill.Kassidy.XXX.1080p.mp4", MatchableItem::inputs));
    }

    #[test]
    fn test_ignore_single_names() {
        let m = matcher_with(|o| o.ignore_single_names = true);
        assert!(!m.is_matching_item(&item("k", "Kassidy", &[]), "jill kassidy swallowed", MatchableItem::inputs));
        assert!(m.is_matching_item(&item("jk", "Jill Kassidy", &[]), "jill kassidy swallowed", MatchableItem::inputs));
    }

    #[test]
    fn test_hyphenated_name_counts_as_two_words() {
        let m = matcher_with(|o| o.ignore_single_names = true);
        assert!(m.is_matching_item(&item("mj", "Mary-Jane", &[]), "mary jane scene", MatchableItem::inputs));
    }

    #[test]
    fn test_camel_case_words() {
        let m = matcher_with(|o| o.camel_case_words = true);
        assert_eq!(tokens(&m, "JillKassidy.mp4"), vec![vec!["jill", "kassidy", "mp4"]]);

        let plain = matcher();
        assert_eq!(tokens(&plain, "JillKassidy.mp4"), vec![vec!["jillkassidy", "mp4"]]);
    }

    #[test]
    fn test_accents_folded() {
        let m = matcher();
        assert!(m.is_matching_item(&item("t", "teest", &[]), "téèst.scene", MatchableItem::inputs));
    }

    #[test]
    fn test_sort_by_longest_match() {
        let m = matcher();
        let items = vec![
            item("anal", "Anal", &[]),
            item("layla", "Layla", &["Layla Love"]),
            item("blonde", "Blonde", &[]),
            item("all_anal_blonde", "All Anal Blonde", &[]),
        ];
        let found = m.filter_matching_items(&items, "Layla.Love.All.Anal.Blonde", MatchableItem::inputs, None);
        let ids: Vec<_> = found.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["all_anal_blonde", "layla", "anal", "blonde"]);
    }

    #[test]
    fn test_sort_disabled_keeps_discovery_order() {
        let m = matcher_with(|o| o.sort_by_longest_match = false);
        let items = vec![item("anal", "Anal", &[]), item("layla", "Layla Love", &[])];
        let found = m.filter_matching_items(&items, "Layla Love All Anal", MatchableItem::inputs, None);
        assert_eq!(found[0].id.as_str(), "anal");
    }

    #[test]
    fn test_regex_length_counts_matched_words() {
        let m = matcher();
        let items = vec![
            item("blonde", "Blonde", &[]),
            item("ll", "LL", &["regex:layla[ ._]love"]),
        ];
        let found = m.filter_matching_items(&items, "Layla_Love Blonde", MatchableItem::inputs, None);
        assert_eq!(found[0].id.as_str(), "ll");
    }

    #[test]
    fn test_no_separators_configured() {
        let m = matcher_with(|o| {
            o.word_separators.clear();
            o.group_separators.clear();
            o.filepath_separators.clear();
        });
        assert_eq!(tokens(&m, "a_b c/d"), vec![vec!["a_b", "c/d"]]);
    }

    #[test]
    fn test_invalid_separator() {
        let err = WordMatcher::new(WordMatcherOptions {
            group_separators: vec!["[".to_string()],
            ..WordMatcherOptions::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { field: "group separator", .. }));
    }
}
