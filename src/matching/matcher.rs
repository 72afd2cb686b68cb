use crate::core::item::MatchInput;

/// Words of a text, grouped into segments a match may not cross
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    segments: Vec<Vec<String>>,
}

impl TokenStream {
    /// A stream with a single segment
    #[must_use]
    pub fn single(words: Vec<String>) -> Self {
        Self::from_segments(std::iter::once(words))
    }

    /// Build a stream from segments, dropping segments with no words
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        Self {
            segments: segments.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Vec<String>] {
        &self.segments
    }

    pub fn words(&self) -> impl Iterator<Item = &String> {
        self.segments.iter().flatten()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `needle`'s words appear contiguously and in order in this stream.
    ///
    /// A single-segment needle must fit inside one segment. A needle that itself
    /// spans segments is compared against the flattened stream.
    #[must_use]
    pub fn contains_sequence(&self, needle: &TokenStream) -> bool {
        match needle.segments.as_slice() {
            [] => false,
            [words] => self
                .segments
                .iter()
                .any(|segment| contains_window(segment, words)),
            _ => {
                let haystack: Vec<&String> = self.words().collect();
                let needle: Vec<&String> = needle.words().collect();
                contains_window(&haystack, &needle)
            }
        }
    }
}

fn contains_window<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

/// A target text tokenized once and tested against many candidates
#[derive(Debug, Clone)]
pub struct PreparedTarget<'t> {
    raw: &'t str,
    tokens: TokenStream,
}

/// Common behaviour of the string and word matchers.
///
/// Implementors only decide how text is tokenized; containment, single-name
/// suppression, pattern aliases and result ordering are shared.
pub trait Matcher {
    /// Split text into normalized words
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Whether single-word literal inputs are ignored
    fn ignore_single_names(&self) -> bool;

    /// Default ordering used by [`Matcher::filter_matching_items`]
    fn sort_by_longest_match(&self) -> bool;

    fn prepare<'t>(&self, target: &'t str) -> PreparedTarget<'t> {
        PreparedTarget {
            raw: target,
            tokens: self.tokenize(target),
        }
    }

    /// Number of words matched if `input` is found in `target`.
    ///
    /// Literal inputs must appear as a contiguous word sequence. Pattern inputs
    /// run against the raw target and are exempt from single-name suppression;
    /// their length is the word count of the matched text.
    fn match_length(&self, input: MatchInput<'_>, target: &PreparedTarget<'_>) -> Option<usize> {
        if target.raw.is_empty() {
            return None;
        }

        match input {
            MatchInput::Pattern(regex) => regex
                .find(target.raw)
                .map(|m| self.tokenize(m.as_str()).word_count()),
            MatchInput::Text(text) => {
                let needle = self.tokenize(text);
                let count = needle.word_count();
                if count == 0 || (count == 1 && self.ignore_single_names()) {
                    return None;
                }
                target.tokens.contains_sequence(&needle).then_some(count)
            }
        }
    }

    /// Longest match among the inputs `select` returns for `item`
    fn item_match_length<T, S>(&self, item: &T, target: &PreparedTarget<'_>, select: &S) -> Option<usize>
    where
        S: Fn(&T) -> Vec<MatchInput<'_>>,
    {
        select(item)
            .into_iter()
            .filter_map(|input| self.match_length(input, target))
            .max()
    }

    /// Whether any input of `item` is found in `target`
    fn is_matching_item<T, S>(&self, item: &T, target: &str, select: S) -> bool
    where
        S: Fn(&T) -> Vec<MatchInput<'_>>,
    {
        let prepared = self.prepare(target);
        self.item_match_length(item, &prepared, &select).is_some()
    }

    /// The items found in `target`.
    ///
    /// Items keep their input order unless longest-match sorting is on (either
    /// passed explicitly or taken from the matcher's options), in which case
    /// they are ordered by descending matched word count, ties in input order.
    fn filter_matching_items<'i, T, S>(
        &self,
        items: &'i [T],
        target: &str,
        select: S,
        sort_by_longest_match: Option<bool>,
    ) -> Vec<&'i T>
    where
        S: Fn(&T) -> Vec<MatchInput<'_>>,
    {
        let prepared = self.prepare(target);

        let mut matched: Vec<(&'i T, usize)> = items
            .iter()
            .filter_map(|item| {
                self.item_match_length(item, &prepared, &select)
                    .map(|len| (item, len))
            })
            .collect();

        if sort_by_longest_match.unwrap_or_else(|| self.sort_by_longest_match()) {
            // Stable, so equal lengths stay in discovery order
            matched.sort_by(|a, b| b.1.cmp(&a.1));
        }

        matched.into_iter().map(|(item, _)| item).collect()
    }
}
