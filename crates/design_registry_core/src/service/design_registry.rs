//! Design registry state machine.
//!
//! # Responsibility
//! - Assign sequential design ids and create owned design records.
//! - Gate content updates on record existence, then on ownership.
//! - Serve read-only lookups as owned copies.
//!
//! # Invariants
//! - Ids start at 1, strictly increase and are never reused.
//! - `owner` and `creation_height` never change after `register`.
//! - No operation removes a record.
//! - `update` applies all content fields or none.

use crate::model::design::{BlockHeight, Design, DesignContent, DesignId, Principal};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Contract error code for an unknown design id.
pub const ERR_NOT_FOUND: u32 = 404;
/// Contract error code for a caller that does not own the design.
pub const ERR_UNAUTHORIZED: u32 = 403;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Terminal, non-retriable failures of registry mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No design was ever issued with this id.
    NotFound(DesignId),
    /// `caller` is not the owner of design `id`.
    Unauthorized { id: DesignId, caller: Principal },
}

impl RegistryError {
    /// Numeric code matching the contract's error constants.
    pub fn code(&self) -> u32 {
        match self {
            Self::NotFound(_) => ERR_NOT_FOUND,
            Self::Unauthorized { .. } => ERR_UNAUTHORIZED,
        }
    }

    fn log_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Unauthorized { .. } => "unauthorized",
        }
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "design not found: {id}"),
            Self::Unauthorized { id, caller } => {
                write!(f, "principal `{caller}` is not the owner of design {id}")
            }
        }
    }
}

impl Error for RegistryError {}

/// In-memory registry of design records plus the id counter.
///
/// Mutations take `&mut self`; callers needing shared access across threads
/// use `SharedDesignRegistry`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignRegistry {
    last_design_id: DesignId,
    designs: BTreeMap<DesignId, Design>,
}

impl DesignRegistry {
    /// Creates an empty registry. The first `register` returns id `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new design owned by `caller`.
    ///
    /// Content is stored verbatim and `block_height` becomes the immutable
    /// `creation_height`. This operation cannot fail.
    pub fn register(
        &mut self,
        caller: &Principal,
        content: DesignContent,
        block_height: BlockHeight,
    ) -> DesignId {
        // Only this method advances the counter, one stored record per id, so
        // the map exhausts memory long before `DesignId::MAX` is reached.
        let id = self.last_design_id + 1;
        self.last_design_id = id;
        self.designs
            .insert(id, Design::new(id, caller.clone(), content, block_height));

        info!(
            "event=design_register module=registry status=ok design_id={} height={}",
            id, block_height
        );
        id
    }

    /// Replaces the content of design `id` on behalf of `caller`.
    ///
    /// Existence is checked before ownership, so an unissued id reports
    /// `NotFound` for every caller.
    ///
    /// # Errors
    /// - `NotFound` when `id` was never issued.
    /// - `Unauthorized` when `caller` is not the stored owner.
    pub fn update(
        &mut self,
        caller: &Principal,
        id: DesignId,
        content: DesignContent,
    ) -> RegistryResult<DesignId> {
        let result = match self.designs.get_mut(&id) {
            None => Err(RegistryError::NotFound(id)),
            Some(design) if !design.is_owned_by(caller) => Err(RegistryError::Unauthorized {
                id,
                caller: caller.clone(),
            }),
            Some(design) => {
                design.content = content;
                Ok(id)
            }
        };

        match &result {
            Ok(_) => info!(
                "event=design_update module=registry status=ok design_id={}",
                id
            ),
            Err(err) => warn!(
                "event=design_update module=registry status=error design_id={} error_code={}",
                id,
                err.log_code()
            ),
        }
        result
    }

    /// Returns a copy of design `id`, or `None` if it was never issued.
    pub fn get(&self, id: DesignId) -> Option<Design> {
        self.designs.get(&id).cloned()
    }

    /// Returns whether design `id` exists.
    pub fn contains(&self, id: DesignId) -> bool {
        self.designs.contains_key(&id)
    }

    /// Returns the most recently issued id, `0` before the first register.
    pub fn last_design_id(&self) -> DesignId {
        self.last_design_id
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{DesignRegistry, RegistryError};
    use crate::model::design::{DesignContent, DesignId, Principal};

    fn content(name: &str) -> DesignContent {
        DesignContent::new(name, "desc", "Flood", "Raised floor", "Concrete")
    }

    #[test]
    fn failed_updates_do_not_advance_counter() {
        let mut registry = DesignRegistry::new();
        let owner = Principal::from("owner");
        registry.register(&owner, content("a"), 1);

        let _ = registry.update(&owner, 5, content("x"));
        let _ = registry.update(&Principal::from("other"), 1, content("x"));

        assert_eq!(registry.last_design_id(), 1);
        assert_eq!(registry.register(&owner, content("b"), 2), 2);
    }

    #[test]
    fn error_codes_match_contract_constants() {
        assert_eq!(RegistryError::NotFound(1).code(), 404);
        let unauthorized = RegistryError::Unauthorized {
            id: 1,
            caller: Principal::from("x"),
        };
        assert_eq!(unauthorized.code(), 403);
        assert!(unauthorized.to_string().contains("not the owner"));
    }

    #[test]
    fn counter_is_private_and_starts_at_zero() {
        let mut registry = DesignRegistry::default();
        assert_eq!(registry.last_design_id(), 0);
        assert!(registry.is_empty());

        let id = registry.register(&Principal::from("owner"), content("a"), 0);
        assert_eq!(id, 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn register_issues_ids_up_to_the_last_representable_value() {
        let mut registry = DesignRegistry::new();
        registry.last_design_id = DesignId::MAX - 1;

        let id = registry.register(&Principal::from("owner"), content("edge"), 3);
        assert_eq!(id, DesignId::MAX);
        assert_eq!(registry.get(DesignId::MAX).unwrap().id, DesignId::MAX);
        assert!(!registry.contains(0));
    }
}
