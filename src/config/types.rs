//! Configuration types for the bonus policy.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from `policy.yaml`. Every field is optional in the file.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary and attendance constants a deployment configures.
///
/// The policy is passed into every calculation call, so the same engine can
/// run what-if scenarios under different policies side by side.
///
/// # Example
///
/// ```
/// use bonus_engine::config::BonusPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = BonusPolicy::default();
/// assert_eq!(policy.mileage_rate, Decimal::from_str("0.60").unwrap());
/// assert_eq!(policy.default_pool_percentage, Decimal::from_str("4.5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusPolicy {
    /// Reimbursement per mile driven in a personal vehicle.
    pub mileage_rate: Decimal,
    /// Pool percentage used when a request does not supply one.
    pub default_pool_percentage: Decimal,
    /// How many times its amount an unreported damage costs the pool.
    pub unreported_damage_multiplier: Decimal,
    /// Arrivals after this time of day are tardy.
    pub tardy_cutoff: NaiveTime,
}

impl Default for BonusPolicy {
    fn default() -> Self {
        Self {
            mileage_rate: Decimal::new(60, 2),
            default_pool_percentage: Decimal::new(45, 1),
            unreported_damage_multiplier: Decimal::from(2),
            tardy_cutoff: NaiveTime::from_hms_opt(7, 15, 0).unwrap_or_default(),
        }
    }
}
