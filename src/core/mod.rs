//! Core data types for entity matching.
//!
//! - [`EntityId`], [`EntityKind`]: identity and category of a known entity
//! - [`MatchableItem`]: an entity's name and aliases as seen by the matchers
//! - [`Alias`]: literal text or a `regex:` pattern
//! - [`StudioHierarchy`]: parent links between studios
//!
//! ## Aliases
//!
//! Catalogs store aliases as plain strings. A `regex:` prefix opts an alias into
//! pattern semantics:
//!
//! | Catalog form          | Parsed as                          |
//! |-----------------------|------------------------------------|
//! | `Kali Rose`           | `Alias::Literal("Kali Rose")`      |
//! | `regex:j\.?kassidy`   | `Alias::Pattern(/j\.?kassidy/i)`   |
//!
//! [`EntityId`]: types::EntityId
//! [`EntityKind`]: types::EntityKind
//! [`MatchableItem`]: item::MatchableItem
//! [`Alias`]: item::Alias
//! [`StudioHierarchy`]: hierarchy::StudioHierarchy

pub mod hierarchy;
pub mod item;
pub mod types;
