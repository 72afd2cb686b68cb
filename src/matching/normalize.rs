//! Canonical comparison form for names and targets.
//!
//! Every function here is total: any input, including the empty string,
//! produces a (possibly empty) output.

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters removed by the string matcher unless configured otherwise.
///
/// Letters, digits, apostrophe, slash, comma, parentheses, brackets, braces and
/// hyphen survive; dots, underscores, colons and everything else become word
/// boundaries.
pub const DEFAULT_STRIP_PATTERN: &str = r"[^\p{L}\p{N}'/,()\[\]{}\-]";

/// Allowed punctuation that still ends a word.
///
/// Only apostrophe and hyphen are word-internal: `o'neil` and `ac-dc` stay one
/// word, while `kassidy,` and `(jill` lose their punctuation.
pub const WORD_BOUNDARY_PUNCTUATION: &[char] = &['/', ',', '(', ')', '[', ']', '{', '}'];

/// Fold accents to their base letter and lower-case.
///
/// # Examples
///
/// ```
/// use scene_matcher::matching::normalize::normalize;
///
/// assert_eq!(normalize("Téèst"), "teest");
/// assert_eq!(normalize("BLACKED"), "blacked");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Replace every match of `pattern` with a space
#[must_use]
pub fn strip(s: &str, pattern: &Regex) -> String {
    pattern.replace_all(s, " ").into_owned()
}

/// Insert a space at each lower-to-upper case transition.
///
/// Must run before [`normalize`], which discards case.
///
/// ```
/// use scene_matcher::matching::normalize::split_camel_case;
///
/// assert_eq!(split_camel_case("JillKassidy"), "Jill Kassidy");
/// assert_eq!(split_camel_case("BLACKED"), "BLACKED");
/// ```
#[must_use]
pub fn split_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if prev_lower && c.is_uppercase() {
            out.push(' ');
        }
        prev_lower = c.is_lowercase();
        out.push(c);
    }

    out
}

/// Split on whitespace into owned words
#[must_use]
pub fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Split on whitespace and on any of `boundaries`, dropping empty words
#[must_use]
pub fn split_words(s: &str, boundaries: &[char]) -> Vec<String> {
    s.split(|c: char| c.is_whitespace() || boundaries.contains(&c))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
