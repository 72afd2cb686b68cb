//! Entity catalog storage.
//!
//! The catalog holds the actors, labels and studios a library knows about,
//! plus the studio ownership links. It is the candidate supply the
//! [`Extractor`](crate::extract::Extractor) matches against.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "actors":  [{"id": "jill", "name": "Jill Kassidy", "aliases": ["regex:j\\.?kassidy"]}],
//!   "labels":  [{"id": "anal", "name": "Anal"}],
//!   "studios": [
//!     {"id": "vixen", "name": "VIXEN"},
//!     {"id": "blacked", "name": "BLACKED", "parent": "vixen"}
//!   ]
//! }
//! ```
//!
//! Ids must be unique within a kind and studio parents must exist and must not
//! form a cycle. Aliases starting with `regex:` are compiled as patterns; one
//! that fails to compile is skipped with a warning.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scene_matcher::catalog::store::EntityCatalog;
//! use std::path::Path;
//!
//! let catalog = EntityCatalog::load_from_file(Path::new("library.json")).unwrap();
//! println!("{} entities", catalog.len());
//! ```

pub mod store;
