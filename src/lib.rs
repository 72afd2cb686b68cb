//! # scene-matcher
//!
//! A library for finding the actors, labels and studios referenced in media
//! file paths and scene titles.
//!
//! Files in a media library come from many sources with many naming
//! conventions: dotted release names, underscores, bracketed tags, mixed case
//! and accented characters. `scene-matcher` tokenizes such text into words and
//! looks for the names and aliases of known entities as whole, in-order word
//! sequences.
//!
//! ## Features
//!
//! - **Accent and case folding**: `Zoé` matches `ZOE`
//! - **Two tokenizers**: character stripping for free text, separator rules for release names
//! - **Single-name suppression**: optionally ignore one-word names that cause false positives
//! - **Regex aliases**: `regex:` aliases run as case-insensitive patterns
//! - **Studio hierarchy**: a parent network is dropped when its sub-studio matched
//! - **Longest match first**: optional ordering by matched word count
//!
//! ## Example
//!
//! ```rust
//! use scene_matcher::{EntityCatalog, Extractor, MatchStrategy, MatcherConfig};
//!
//! let catalog = EntityCatalog::from_json(r#"{
//!     "version": "1.0.0",
//!     "actors": [{"id": "alina", "name": "Alina Lopez"}],
//!     "studios": [
//!         {"id": "vixen", "name": "VIXEN"},
//!         {"id": "blacked", "name": "BLACKED", "parent": "vixen"}
//!     ]
//! }"#).unwrap();
//!
//! let matcher = MatchStrategy::from_config(&MatcherConfig::default()).unwrap();
//! let extractor = Extractor::new(&matcher, &catalog);
//!
//! let path = "/media/VIXEN/BLACKED/BLACKED - Alina Lopez - Scene.mp4";
//! assert_eq!(extractor.actors(path)[0].as_str(), "alina");
//! assert_eq!(extractor.studios(path)[0].as_str(), "blacked");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Entity catalog storage
//! - [`core`]: Core data types for entities, aliases and the studio hierarchy
//! - [`matching`]: Normalization, matchers and their configuration
//! - [`extract`]: Actor, label and studio extraction
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod extract;
pub mod matching;

// Re-export commonly used types for convenience
pub use catalog::store::EntityCatalog;
pub use core::hierarchy::{StudioHierarchy, StudioHierarchyLink};
pub use core::item::{Alias, MatchInput, MatchableItem};
pub use core::types::*;
pub use extract::{extract_actors, extract_labels, extract_studios, CandidateSource, Extraction, Extractor};
pub use matching::{MatchStrategy, Matcher, MatcherConfig};
