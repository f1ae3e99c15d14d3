//! Core use-case services.
//!
//! # Responsibility
//! - Own the design registry state machine and its concurrency wrapper.
//! - Keep host/storage layers decoupled from registry invariants.

pub mod design_registry;
pub mod shared_registry;
