//! Studio parent links and ancestor lookups.
//!
//! Studios form a forest: a network owns sub-studios, which may own further
//! sites. The graph is expected to be acyclic; walks are still bounded so a
//! bad link in caller data cannot loop forever.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::EntityId;

/// Maximum number of parent hops followed from any studio
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// A single ownership link supplied alongside the studio candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioHierarchyLink {
    pub studio_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
}

impl StudioHierarchyLink {
    pub fn new(studio_id: impl Into<EntityId>, parent_id: Option<EntityId>) -> Self {
        Self {
            studio_id: studio_id.into(),
            parent_id,
        }
    }
}

/// Parent lookup table built from hierarchy links
#[derive(Debug, Clone, Default)]
pub struct StudioHierarchy {
    parents: HashMap<EntityId, EntityId>,
}

impl StudioHierarchy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from links; studios without a parent are roots and add nothing
    pub fn from_links<I>(links: I) -> Self
    where
        I: IntoIterator<Item = StudioHierarchyLink>,
    {
        let parents = links
            .into_iter()
            .filter_map(|link| link.parent_id.map(|parent| (link.studio_id, parent)))
            .collect();
        Self { parents }
    }

    /// Record that `studio` is owned by `parent`
    pub fn insert(&mut self, studio: EntityId, parent: EntityId) {
        self.parents.insert(studio, parent);
    }

    #[must_use]
    pub fn parent_of(&self, studio: &EntityId) -> Option<&EntityId> {
        self.parents.get(studio)
    }

    /// All ancestors of `studio`, nearest first, up to the root.
    ///
    /// Stops early if a cycle is found or `MAX_HIERARCHY_DEPTH` is reached.
    #[must_use]
    pub fn ancestors(&self, studio: &EntityId) -> Vec<&EntityId> {
        let mut chain = Vec::new();
        let mut seen: HashSet<&EntityId> = HashSet::new();
        let mut current = studio;

        while let Some(parent) = self.parents.get(current) {
            if parent == studio || !seen.insert(parent) {
                warn!(studio = %studio, at = %parent, "Cycle in studio hierarchy, stopping walk");
                break;
            }
            if chain.len() >= MAX_HIERARCHY_DEPTH {
                warn!(studio = %studio, "Studio hierarchy deeper than {MAX_HIERARCHY_DEPTH}, stopping walk");
                break;
            }
            chain.push(parent);
            current = parent;
        }

        chain
    }

    #[must_use]
    pub fn is_ancestor(&self, candidate: &EntityId, of: &EntityId) -> bool {
        self.ancestors(of).contains(&candidate)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
