//! Request types for the bonus engine API.
//!
//! This module defines the JSON request structures for the
//! `/bonus/calculate` and `/perfect-week/check` endpoints, and the
//! validation a request must pass before it reaches the engine.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::BonusInput;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Attendance, ChecklistCompletion, Damage, Employee, MileageEntry, PerfectWeek,
    PerformanceEvent,
};

/// Largest revenue or damage amount a request may carry.
///
/// Keeps every intermediate product of a calculation well inside
/// `Decimal`'s range.
pub const MAX_MONEY_AMOUNT: i64 = 1_000_000_000_000;

/// Largest mileage a single entry may carry.
pub const MAX_MILES_PER_ENTRY: i64 = 1_000_000;

/// Request body for the `/bonus/calculate` endpoint.
///
/// Record collections are expected to be scoped to the target month already.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCalculationRequest {
    /// The month's total revenue.
    pub total_revenue: Decimal,
    /// Pool percentage; the policy default applies when omitted.
    #[serde(default)]
    pub pool_percentage: Option<Decimal>,
    /// Date to measure tenure at; today when omitted.
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
    /// All employees. Inactive ones are skipped by the engine.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// The month's damages.
    #[serde(default)]
    pub damages: Vec<Damage>,
    /// The month's recognition events.
    #[serde(default)]
    pub performance_events: Vec<PerformanceEvent>,
    /// The month's mileage entries.
    #[serde(default)]
    pub mileage_entries: Vec<MileageEntry>,
    /// The month's perfect-week records.
    #[serde(default)]
    pub perfect_weeks: Vec<PerfectWeek>,
}

impl BonusCalculationRequest {
    /// Checks the inputs the engine relies on its callers to check.
    ///
    /// Revenue must be positive, the percentage (when given) must lie in
    /// 0..=100, and damage amounts and miles must not be negative. Revenue
    /// and damage amounts are capped at [`MAX_MONEY_AMOUNT`], miles at
    /// [`MAX_MILES_PER_ENTRY`].
    pub fn validate(&self) -> EngineResult<()> {
        let max_money = Decimal::from(MAX_MONEY_AMOUNT);
        let max_miles = Decimal::from(MAX_MILES_PER_ENTRY);

        if self.total_revenue <= Decimal::ZERO {
            return Err(EngineError::InvalidRevenue {
                value: self.total_revenue,
                message: "must be greater than zero".to_string(),
            });
        }
        if self.total_revenue > max_money {
            return Err(EngineError::InvalidRevenue {
                value: self.total_revenue,
                message: format!("must not exceed {}", max_money),
            });
        }

        if let Some(pct) = self.pool_percentage {
            if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
                return Err(EngineError::InvalidPoolPercentage { value: pct });
            }
        }

        for damage in &self.damages {
            let problem = if damage.amount < Decimal::ZERO {
                "must not be negative"
            } else if damage.amount > max_money {
                "exceeds the largest accepted amount"
            } else {
                continue;
            };
            return Err(EngineError::InvalidRecord {
                kind: "damage".to_string(),
                id: damage.id.clone(),
                message: format!("amount {}, got {}", problem, damage.amount),
            });
        }

        for entry in &self.mileage_entries {
            let problem = if entry.miles < Decimal::ZERO {
                "must not be negative"
            } else if entry.miles > max_miles {
                "exceed the largest accepted distance"
            } else {
                continue;
            };
            return Err(EngineError::InvalidRecord {
                kind: "mileage entry".to_string(),
                id: entry.id.clone(),
                message: format!("miles {}, got {}", problem, entry.miles),
            });
        }

        Ok(())
    }

    /// Borrows the request as engine input.
    pub fn as_input(&self) -> BonusInput<'_> {
        BonusInput {
            total_revenue: self.total_revenue,
            pool_percentage: self.pool_percentage,
            as_of_date: self.as_of_date,
            employees: &self.employees,
            damages: &self.damages,
            performance_events: &self.performance_events,
            mileage_entries: &self.mileage_entries,
            perfect_weeks: &self.perfect_weeks,
        }
    }
}

/// Request body for the `/perfect-week/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfectWeekCheckRequest {
    /// The employee's attendance for the week.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
    /// The employee's checklist completions for the week.
    #[serde(default)]
    pub checklist_completions: Vec<ChecklistCompletion>,
}

/// One day of attendance in a perfect-week check.
///
/// Tardiness is not accepted from the client; it is derived from
/// `arrival_time` and the policy cutoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The working day.
    pub date: NaiveDate,
    /// Arrival time at the warehouse.
    #[serde(default)]
    pub arrival_time: Option<NaiveTime>,
    /// Whether the employee was in uniform.
    pub in_uniform: bool,
}

impl AttendanceRequest {
    /// Converts the request into an attendance record under `tardy_cutoff`.
    pub fn into_attendance(self, tardy_cutoff: NaiveTime) -> Attendance {
        Attendance::log(
            self.id,
            self.employee_id,
            self.date,
            self.arrival_time,
            self.in_uniform,
            tardy_cutoff,
        )
    }
}
