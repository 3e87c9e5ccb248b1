//! Personal-vehicle mileage entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_money;

/// Roundtrip miles an employee drove their own vehicle for work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee being reimbursed.
    pub employee_id: String,
    /// The job the trip was for, if any.
    #[serde(default)]
    pub job_id: Option<String>,
    /// The date of the trip.
    pub date: NaiveDate,
    /// Miles driven.
    pub miles: Decimal,
    /// Reimbursement recorded when the entry was logged.
    pub amount: Decimal,
}

impl MileageEntry {
    /// Logs a new entry, pricing the trip at `rate` per mile.
    ///
    /// # Examples
    ///
    /// ```
    /// use bonus_engine::models::MileageEntry;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let entry = MileageEntry::log(
    ///     "mi_001",
    ///     "emp_001",
    ///     None,
    ///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     Decimal::from_str("42.5").unwrap(),
    ///     Decimal::from_str("0.60").unwrap(),
    /// );
    /// assert_eq!(entry.amount, Decimal::from_str("25.50").unwrap());
    /// ```
    pub fn log(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        job_id: Option<String>,
        date: NaiveDate,
        miles: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            job_id,
            date,
            miles,
            amount: round_money(miles.saturating_mul(rate)),
        }
    }
}
