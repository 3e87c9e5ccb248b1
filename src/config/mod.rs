//! Configuration loading and management for the bonus engine.
//!
//! This module loads the bonus policy (mileage rate, default pool
//! percentage, unreported-damage multiplier, tardy cutoff) from YAML.
//!
//! # Example
//!
//! ```no_run
//! use bonus_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default pool: {}%", config.policy().default_pool_percentage);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE};
pub use types::BonusPolicy;
