//! Matchers that find known names inside noisy text.
//!
//! This module provides the matching engine:
//!
//! - [`normalize`]: case and accent folding, character stripping
//! - [`StringMatcher`]: strips characters outside an allow-list, then compares words
//! - [`WordMatcher`]: splits on configurable separator patterns, then compares words
//! - [`MatchStrategy`]: the one matcher chosen by [`MatcherConfig`]
//! - [`Matcher`]: the interface both matchers share
//!
//! ## Matching Algorithm
//!
//! 1. **Tokenize** the target once into normalized words (optionally split into
//!    path segments)
//! 2. **Tokenize** each candidate name and literal alias the same way
//! 3. **Compare**: a literal matches when its words appear contiguously and in
//!    order in the target
//! 4. **Patterns**: `regex:` aliases run case-insensitively against the raw target
//!
//! Single-word literals are skipped when `ignoreSingleNames` is set, so a bare
//! first name does not tag every scene that mentions it.
//!
//! ## Example
//!
//! ```rust
//! use scene_matcher::core::item::MatchableItem;
//! use scene_matcher::matching::{MatchStrategy, Matcher, MatcherConfig};
//!
//! let matcher = MatchStrategy::from_config(&MatcherConfig::default()).unwrap();
//! let actors = vec![
//!     MatchableItem::new("a1", "Jill Kassidy", Vec::<String>::new()),
//!     MatchableItem::new("a2", "Kali Roses", ["Kali Rose"]),
//! ];
//!
//! let found = matcher.filter_matching_items(
//!     &actors,
//!     "Kali.Rose.And.Jill.Kassidy.1080p.mp4",
//!     MatchableItem::inputs,
//!     None,
//! );
//! assert_eq!(found.len(), 2);
//! ```
//!
//! [`normalize`]: normalize::normalize
//! [`StringMatcher`]: string_matcher::StringMatcher
//! [`WordMatcher`]: word_matcher::WordMatcher

pub mod config;
pub mod matcher;
pub mod normalize;
pub mod strategy;
pub mod string_matcher;
pub mod word_matcher;

pub use config::{ConfigError, MatcherConfig, StringMatcherOptions, WordMatcherOptions};
pub use matcher::{Matcher, PreparedTarget, TokenStream};
pub use strategy::MatchStrategy;
