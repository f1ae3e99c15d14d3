//! Core state machine for a registry of disaster-resilient building designs.
//! This crate is the single source of truth for registry invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::design::{BlockHeight, Design, DesignContent, DesignId, Principal};
pub use service::design_registry::{
    DesignRegistry, RegistryError, RegistryResult, ERR_NOT_FOUND, ERR_UNAUTHORIZED,
};
pub use service::shared_registry::SharedDesignRegistry;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
