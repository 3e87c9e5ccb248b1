//! Bonus calculation result models.
//!
//! This module contains the [`BonusResult`] type and its associated
//! structures: the pool breakdown, one payout record per active employee,
//! and the audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditTrace;

/// How the month's bonus pool was formed and split.
///
/// Money fields are rounded to cents; share and score totals are counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolBreakdown {
    /// The month's revenue as supplied by the caller.
    pub total_revenue: Decimal,
    /// The pool percentage actually used.
    pub pool_percentage: Decimal,
    /// Revenue times pool percentage.
    pub gross_pool: Decimal,
    /// Sum of all damage pool impacts.
    pub damages_deducted: Decimal,
    /// Gross pool less damages, never negative.
    pub net_pool: Decimal,
    /// Half of the net pool, distributed by tenure shares.
    pub tenure_pool: Decimal,
    /// Half of the net pool, distributed by performance score.
    pub performance_pool: Decimal,
    /// Sum of all active employees' tenure shares.
    pub total_tenure_shares: u32,
    /// Sum of all active employees' performance scores.
    pub total_performance_score: u32,
}

/// One active employee's bonus for the month.
///
/// # Example
///
/// ```
/// use bonus_engine::models::EmployeePayout;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let payout = EmployeePayout {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Dana Reyes".to_string(),
///     tenure_months: 3,
///     tenure_shares: 3,
///     tenure_amount: Decimal::from_str("168.75").unwrap(),
///     performance_score: 0,
///     performance_amount: Decimal::ZERO,
///     mileage_amount: Decimal::from_str("10.80").unwrap(),
///     perfect_week_hours: 1,
///     perfect_week_amount: Decimal::ZERO,
///     total_amount: Decimal::from_str("179.55").unwrap(),
/// };
/// assert!(payout.total_amount > payout.tenure_amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayout {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Completed months of employment at the calculation date.
    pub tenure_months: u32,
    /// Tenure shares held (one per completed month).
    pub tenure_shares: u32,
    /// The employee's slice of the tenure pool.
    pub tenure_amount: Decimal,
    /// Recognition points earned this month.
    pub performance_score: u32,
    /// The employee's slice of the performance pool.
    pub performance_amount: Decimal,
    /// Mileage reimbursement, paid on top of the pool.
    pub mileage_amount: Decimal,
    /// Bonus hours earned from perfect weeks.
    pub perfect_week_hours: u32,
    /// Dollar value of perfect-week hours; always zero under the current policy.
    pub perfect_week_amount: Decimal,
    /// Sum of the unrounded components, rounded once.
    pub total_amount: Decimal,
}

/// The complete result of a monthly bonus calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusResult {
    /// The date tenure was measured at.
    pub as_of_date: NaiveDate,
    /// Pool figures.
    pub breakdown: PoolBreakdown,
    /// One payout per active employee, in the caller's order.
    pub payouts: Vec<EmployeePayout>,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

impl BonusResult {
    /// Returns the payout for `employee_id`, if that employee was active.
    pub fn payout_for(&self, employee_id: &str) -> Option<&EmployeePayout> {
        self.payouts.iter().find(|p| p.employee_id == employee_id)
    }

    /// Total money disbursed, mileage included.
    ///
    /// Mileage is reimbursed outside the pool, so this can exceed the net pool.
    pub fn total_disbursed(&self) -> Decimal {
        self.payouts
            .iter()
            .map(|p| p.total_amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}
