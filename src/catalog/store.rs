use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::hierarchy::StudioHierarchy;
use crate::core::item::MatchableItem;
use crate::core::types::{EntityId, EntityKind};
use crate::extract::CandidateSource;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: EntityId },

    #[error("Unknown studio '{studio}' in hierarchy link")]
    UnknownStudio { studio: EntityId },

    #[error("Studio '{studio}' has unknown parent '{parent}'")]
    UnknownParent { studio: EntityId, parent: EntityId },

    #[error("Studio hierarchy contains a cycle through '{studio}'")]
    CyclicHierarchy { studio: EntityId },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default)]
    pub actors: Vec<MatchableItem>,
    #[serde(default)]
    pub labels: Vec<MatchableItem>,
    #[serde(default)]
    pub studios: Vec<StudioRecord>,
}

/// A studio as stored in the catalog file, with its optional parent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioRecord {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<EntityId>,
}

/// Known actors, labels and studios with an id index
#[derive(Debug, Default)]
pub struct EntityCatalog {
    actors: Vec<MatchableItem>,
    labels: Vec<MatchableItem>,
    studios: Vec<MatchableItem>,

    /// Parent links between studios
    hierarchy: StudioHierarchy,

    /// Index: (kind, id) -> index in that kind's vec
    id_to_index: HashMap<(EntityKind, EntityId), usize>,
}

impl EntityCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, duplicate ids within a kind, parent
    /// links to unknown studios, or a cyclic studio hierarchy.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for actor in data.actors {
            catalog.add(EntityKind::Actor, actor)?;
        }
        for label in data.labels {
            catalog.add(EntityKind::Label, label)?;
        }

        // All studios first so parents may appear after their children
        let mut links = Vec::new();
        for record in data.studios {
            if let Some(parent) = record.parent {
                links.push((record.id.clone(), parent));
            }
            catalog.add(
                EntityKind::Studio,
                MatchableItem::new(record.id, record.name, record.aliases),
            )?;
        }
        for (studio, parent) in links {
            catalog.set_parent(studio, parent)?;
        }

        Ok(catalog)
    }

    /// Add an entity to the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if the kind already has this id.
    pub fn add(&mut self, kind: EntityKind, item: MatchableItem) -> Result<(), CatalogError> {
        let key = (kind, item.id.clone());
        if self.id_to_index.contains_key(&key) {
            return Err(CatalogError::DuplicateId { kind, id: item.id });
        }

        let items = self.items_mut(kind);
        let index = items.len();
        items.push(item);
        self.id_to_index.insert(key, index);
        Ok(())
    }

    /// Record that `studio` belongs to `parent`
    ///
    /// # Errors
    ///
    /// Returns an error if either studio is unknown or the link closes a cycle.
    pub fn set_parent(&mut self, studio: EntityId, parent: EntityId) -> Result<(), CatalogError> {
        if self.get(EntityKind::Studio, &studio).is_none() {
            return Err(CatalogError::UnknownStudio { studio });
        }
        if self.get(EntityKind::Studio, &parent).is_none() {
            return Err(CatalogError::UnknownParent { studio, parent });
        }

        if studio == parent || self.hierarchy.is_ancestor(&studio, &parent) {
            return Err(CatalogError::CyclicHierarchy { studio });
        }

        self.hierarchy.insert(studio, parent);
        Ok(())
    }

    /// Get an entity by kind and id
    #[must_use]
    pub fn get(&self, kind: EntityKind, id: &EntityId) -> Option<&MatchableItem> {
        self.id_to_index
            .get(&(kind, id.clone()))
            .map(|&idx| &self.items(kind)[idx])
    }

    #[must_use]
    pub fn items(&self, kind: EntityKind) -> &[MatchableItem] {
        match kind {
            EntityKind::Actor => &self.actors,
            EntityKind::Label => &self.labels,
            EntityKind::Studio => &self.studios,
        }
    }

    fn items_mut(&mut self, kind: EntityKind) -> &mut Vec<MatchableItem> {
        match kind {
            EntityKind::Actor => &mut self.actors,
            EntityKind::Label => &mut self.labels,
            EntityKind::Studio => &mut self.studios,
        }
    }

    #[must_use]
    pub fn hierarchy(&self) -> &StudioHierarchy {
        &self.hierarchy
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let studios = self
            .studios
            .iter()
            .map(|studio| StudioRecord {
                id: studio.id.clone(),
                name: studio.name.clone(),
                aliases: studio
                    .aliases
                    .iter()
                    .map(|a| a.as_source().into_owned())
                    .collect(),
                parent: self.hierarchy.parent_of(&studio.id).cloned(),
            })
            .collect();

        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            actors: self.actors.clone(),
            labels: self.labels.clone(),
            studios,
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of entities of every kind
    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len() + self.labels.len() + self.studios.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CandidateSource for EntityCatalog {
    fn candidates(&self, kind: EntityKind) -> &[MatchableItem] {
        self.items(kind)
    }

    fn studio_hierarchy(&self) -> &StudioHierarchy {
        &self.hierarchy
    }
}
