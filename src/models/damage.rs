//! Damage incident model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A damage incident logged against a job and the crew involved.
///
/// Damages are immutable once logged. Each incident reduces the month's
/// bonus pool by its pool impact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    /// Unique identifier for the incident.
    pub id: String,
    /// The job the damage occurred on, if any.
    #[serde(default)]
    pub job_id: Option<String>,
    /// Employees involved in the incident.
    #[serde(default)]
    pub employee_ids: Vec<String>,
    /// What was damaged.
    #[serde(default)]
    pub description: String,
    /// The repair or claim cost.
    pub amount: Decimal,
    /// Whether the crew reported the damage themselves.
    pub was_reported: bool,
    /// The date the damage was logged.
    pub date: NaiveDate,
}

impl Damage {
    /// Returns the amount this incident deducts from the gross pool.
    ///
    /// Reported damages cost their face amount; unreported damages cost the
    /// amount times `unreported_multiplier`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bonus_engine::models::Damage;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let damage = Damage {
    ///     id: "dmg_001".to_string(),
    ///     job_id: None,
    ///     employee_ids: vec![],
    ///     description: "Scratched dresser".to_string(),
    ///     amount: Decimal::from(100),
    ///     was_reported: false,
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
    /// };
    /// assert_eq!(damage.pool_impact(Decimal::from(2)), Decimal::from(200));
    /// ```
    pub fn pool_impact(&self, unreported_multiplier: Decimal) -> Decimal {
        if self.was_reported {
            self.amount
        } else {
            self.amount.saturating_mul(unreported_multiplier)
        }
    }
}
