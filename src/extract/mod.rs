//! Entity extraction from paths and titles.
//!
//! Extractors run a matcher over a candidate set and return the ids of the
//! entities found, in match order with duplicates removed. Studio extraction
//! additionally drops any matched studio whose descendant also matched, so a
//! network never shadows the more specific site it owns.
//!
//! ## Example
//!
//! ```rust
//! use scene_matcher::core::hierarchy::{StudioHierarchy, StudioHierarchyLink};
//! use scene_matcher::core::item::MatchableItem;
//! use scene_matcher::core::types::EntityId;
//! use scene_matcher::extract::extract_studios;
//! use scene_matcher::matching::{MatchStrategy, MatcherConfig};
//!
//! let matcher = MatchStrategy::from_config(&MatcherConfig::default()).unwrap();
//! let studios = vec![
//!     MatchableItem::new("vixen", "VIXEN", Vec::<String>::new()),
//!     MatchableItem::new("blacked", "BLACKED", Vec::<String>::new()),
//! ];
//! let hierarchy = StudioHierarchy::from_links(vec![
//!     StudioHierarchyLink::new("blacked", Some(EntityId::new("vixen"))),
//! ]);
//!
//! let ids = extract_studios(&matcher, "VIXEN/BLACKED/scene.mp4", &studios, &hierarchy);
//! assert_eq!(ids, vec![EntityId::new("blacked")]);
//! ```

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::core::hierarchy::StudioHierarchy;
use crate::core::item::MatchableItem;
use crate::core::types::{EntityId, EntityKind};
use crate::matching::{MatchStrategy, Matcher};

/// Supplies the candidate entities an extractor matches against
pub trait CandidateSource {
    /// Current candidates of one kind
    fn candidates(&self, kind: EntityKind) -> &[MatchableItem];

    /// Parent links between the studio candidates
    fn studio_hierarchy(&self) -> &StudioHierarchy;
}

/// Ids of the actors referenced in `text`
pub fn extract_actors<M: Matcher>(matcher: &M, text: &str, candidates: &[MatchableItem]) -> Vec<EntityId> {
    matched_ids(matcher, text, candidates, EntityKind::Actor)
}

/// Ids of the labels referenced in `text`
pub fn extract_labels<M: Matcher>(matcher: &M, text: &str, candidates: &[MatchableItem]) -> Vec<EntityId> {
    matched_ids(matcher, text, candidates, EntityKind::Label)
}

/// Ids of the studios referenced in `text`, most specific first.
///
/// A matched studio is dropped when one of its descendants also matched.
pub fn extract_studios<M: Matcher>(
    matcher: &M,
    text: &str,
    candidates: &[MatchableItem],
    hierarchy: &StudioHierarchy,
) -> Vec<EntityId> {
    let ids = matched_ids(matcher, text, candidates, EntityKind::Studio);
    remove_ancestors(ids, hierarchy)
}

/// Drop every id that is an ancestor of another id in the list; order is kept
#[must_use]
pub fn remove_ancestors(ids: Vec<EntityId>, hierarchy: &StudioHierarchy) -> Vec<EntityId> {
    if ids.len() < 2 || hierarchy.is_empty() {
        return ids;
    }

    let ancestors: HashSet<EntityId> = ids
        .iter()
        .flat_map(|id| hierarchy.ancestors(id))
        .cloned()
        .collect();

    let before = ids.len();
    let kept: Vec<EntityId> = ids
        .into_iter()
        .filter(|id| !ancestors.contains(id))
        .collect();

    if kept.len() < before {
        debug!(removed = before - kept.len(), "Dropped parent studios shadowed by a sub-studio");
    }

    kept
}

fn matched_ids<M: Matcher>(
    matcher: &M,
    text: &str,
    candidates: &[MatchableItem],
    kind: EntityKind,
) -> Vec<EntityId> {
    let mut seen: HashSet<&EntityId> = HashSet::new();
    let mut ids = Vec::new();
    for item in matcher.filter_matching_items(candidates, text, MatchableItem::inputs, None) {
        if seen.insert(&item.id) {
            ids.push(item.id.clone());
        }
    }

    debug!(
        kind = %kind,
        candidates = candidates.len(),
        matched = ids.len(),
        "Matched entities"
    );

    ids
}

/// Entities of every kind found in one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub actors: Vec<EntityId>,
    pub labels: Vec<EntityId>,
    pub studios: Vec<EntityId>,
}

impl Extraction {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty() && self.labels.is_empty() && self.studios.is_empty()
    }

    /// The ids found for one kind
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> &[EntityId] {
        match kind {
            EntityKind::Actor => &self.actors,
            EntityKind::Label => &self.labels,
            EntityKind::Studio => &self.studios,
        }
    }
}

/// A configured matcher bound to a candidate source
pub struct Extractor<'a, C: CandidateSource + ?Sized> {
    matcher: &'a MatchStrategy,
    source: &'a C,
}

impl<'a, C: CandidateSource + ?Sized> Extractor<'a, C> {
    pub fn new(matcher: &'a MatchStrategy, source: &'a C) -> Self {
        Self { matcher, source }
    }

    #[must_use]
    pub fn actors(&self, text: &str) -> Vec<EntityId> {
        extract_actors(self.matcher, text, self.source.candidates(EntityKind::Actor))
    }

    #[must_use]
    pub fn labels(&self, text: &str) -> Vec<EntityId> {
        extract_labels(self.matcher, text, self.source.candidates(EntityKind::Label))
    }

    /// Matched studios, primary match first
    #[must_use]
    pub fn studios(&self, text: &str) -> Vec<EntityId> {
        extract_studios(
            self.matcher,
            text,
            self.source.candidates(EntityKind::Studio),
            self.source.studio_hierarchy(),
        )
    }

    #[must_use]
    pub fn extract(&self, kind: EntityKind, text: &str) -> Vec<EntityId> {
        match kind {
            EntityKind::Actor => self.actors(text),
            EntityKind::Label => self.labels(text),
            EntityKind::Studio => self.studios(text),
        }
    }

    /// Run all three extractors over `text`
    #[must_use]
    pub fn all(&self, text: &str) -> Extraction {
        Extraction {
            actors: self.actors(text),
            labels: self.labels(text),
            studios: self.studios(text),
        }
    }
}
