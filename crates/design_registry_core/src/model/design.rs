//! Design domain model.
//!
//! # Responsibility
//! - Define the canonical design record and its caller-editable content.
//! - Define the opaque identity and height types supplied by the host.
//!
//! # Invariants
//! - `id`, `owner` and `creation_height` are fixed at creation.
//! - Only `DesignContent` fields are ever replaced after creation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Sequential design identifier. The first issued id is `1`.
pub type DesignId = u64;

/// Host-supplied logical time (block height) recorded at creation.
pub type BlockHeight = u64;

/// Opaque caller identity supplied by the host environment.
///
/// The registry only compares principals for equality; it never inspects or
/// authenticates the underlying value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-editable part of a design.
///
/// All fields are free-form text. No emptiness or vocabulary checks are
/// applied; `disaster_types` is conventionally comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DesignContent {
    pub name: String,
    pub description: String,
    pub disaster_types: String,
    pub resilience_features: String,
    pub materials_required: String,
}

impl DesignContent {
    /// Builds content from the five text fields in contract argument order.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        disaster_types: impl Into<String>,
        resilience_features: impl Into<String>,
        materials_required: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            disaster_types: disaster_types.into(),
            resilience_features: resilience_features.into(),
            materials_required: materials_required.into(),
        }
    }
}

/// Canonical design record held by the registry.
///
/// Serialized with the contract's kebab-case keys
/// (`disaster-types`, `creation-height`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Design {
    /// Registry-assigned id, never reused.
    pub id: DesignId,
    /// Creator identity; the only principal allowed to update.
    pub owner: Principal,
    #[serde(flatten)]
    pub content: DesignContent,
    /// Height supplied by the host when the design was registered.
    pub creation_height: BlockHeight,
}

impl Design {
    /// Creates a design record.
    pub fn new(
        id: DesignId,
        owner: Principal,
        content: DesignContent,
        creation_height: BlockHeight,
    ) -> Self {
        Self {
            id,
            owner,
            content,
            creation_height,
        }
    }

    /// Returns whether `caller` owns this design.
    pub fn is_owned_by(&self, caller: &Principal) -> bool {
        self.owner == *caller
    }
}
