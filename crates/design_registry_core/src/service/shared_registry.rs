//! Thread-safe registry facade for multi-threaded hosts.
//!
//! # Invariants
//! - One mutex guards the counter and the record map together, so ids stay
//!   strictly increasing and update's check-then-write is atomic.
//! - Every mutation completes its checks before touching state, so a
//!   poisoned lock never exposes a half-applied update and is recovered.

use crate::model::design::{BlockHeight, Design, DesignContent, DesignId, Principal};
use crate::service::design_registry::{DesignRegistry, RegistryResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle sharing one `DesignRegistry` across threads.
#[derive(Debug, Clone, Default)]
pub struct SharedDesignRegistry {
    inner: Arc<Mutex<DesignRegistry>>,
}

impl SharedDesignRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// See `DesignRegistry::register`.
    pub fn register(
        &self,
        caller: &Principal,
        content: DesignContent,
        block_height: BlockHeight,
    ) -> DesignId {
        self.lock().register(caller, content, block_height)
    }

    /// See `DesignRegistry::update`.
    pub fn update(
        &self,
        caller: &Principal,
        id: DesignId,
        content: DesignContent,
    ) -> RegistryResult<DesignId> {
        self.lock().update(caller, id, content)
    }

    pub fn get(&self, id: DesignId) -> Option<Design> {
        self.lock().get(id)
    }

    pub fn contains(&self, id: DesignId) -> bool {
        self.lock().contains(id)
    }

    pub fn last_design_id(&self) -> DesignId {
        self.lock().last_design_id()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a point-in-time copy of the whole registry.
    pub fn snapshot(&self) -> DesignRegistry {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, DesignRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
