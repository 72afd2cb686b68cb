use serde::{Deserialize, Serialize};

/// Unique identifier for an entity (actor, label or studio) in a candidate set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Category of entity a candidate set holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Actor,
    Label,
    Studio,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Actor, Self::Label, Self::Studio];

    /// Plural form used in catalog files and CLI output
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Actor => "actors",
            Self::Label => "labels",
            Self::Studio => "studios",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Actor => write!(f, "actor"),
            Self::Label => write!(f, "label"),
            Self::Studio => write!(f, "studio"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_serializes_as_plain_string() {
        let id = EntityId::new("blacked");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"blacked\"");

        let parsed: EntityId = serde_json::from_str("\"vixen\"").unwrap();
        assert_eq!(parsed, EntityId::from("vixen"));
        assert_eq!(parsed.to_string(), "vixen");
    }

    #[test]
    fn test_entity_kind_plural() {
        let plurals: Vec<_> = EntityKind::ALL.iter().map(|k| k.plural()).collect();
        assert_eq!(plurals, vec!["actors", "labels", "studios"]);
    }
}
