//! Domain model for resilient building design records.
//!
//! # Responsibility
//! - Define canonical data structures used by the registry state machine.
//!
//! # Invariants
//! - Every design is identified by a registry-assigned `DesignId`.
//! - Designs are never deleted; there is no tombstone state.

pub mod design;
