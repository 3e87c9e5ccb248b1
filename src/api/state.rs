//! Application state for the bonus engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{BonusPolicy, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded bonus policy. Calculations borrow it read-only, so
/// concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the active bonus policy.
    pub fn policy(&self) -> &BonusPolicy {
        self.config.policy()
    }
}
