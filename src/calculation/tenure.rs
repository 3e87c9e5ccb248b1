//! Tenure months and tenure shares.
//!
//! Each completed month of employment is one share of the tenure pool.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::AuditStep;

use super::roster::ActiveRoster;

/// The result of counting tenure shares for the roster.
#[derive(Debug, Clone)]
pub struct TenureSharesResult {
    /// Shares per roster employee, aligned with the roster order.
    pub shares: Vec<u32>,
    /// Sum of all shares.
    pub total_shares: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the number of whole months between `start` and `as_of`.
///
/// A month is complete once its anniversary has been reached; month addition
/// clamps to the end of shorter months, so a Jan 31 start completes its first
/// month on the last day of February. Dates on or before `start` give zero.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::completed_months;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(completed_months(start, NaiveDate::from_ymd_opt(2025, 4, 14).unwrap()), 2);
/// assert_eq!(completed_months(start, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()), 3);
/// assert_eq!(completed_months(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()), 0);
/// ```
pub fn completed_months(start: NaiveDate, as_of: NaiveDate) -> u32 {
    if as_of <= start {
        return 0;
    }

    let calendar_months = (as_of.year() - start.year()) * 12 + as_of.month() as i32
        - start.month() as i32;
    let mut months = calendar_months.max(0) as u32;

    while months > 0 {
        match start.checked_add_months(Months::new(months)) {
            Some(anniversary) if anniversary <= as_of => break,
            _ => months -= 1,
        }
    }

    months
}

/// Counts tenure shares for every roster employee at `as_of`.
pub fn calculate_tenure_shares(
    roster: &ActiveRoster<'_>,
    as_of: NaiveDate,
    step_number: u32,
) -> TenureSharesResult {
    let shares: Vec<u32> = roster
        .employees()
        .iter()
        .map(|e| completed_months(e.start_date, as_of))
        .collect();
    let total_shares = shares.iter().copied().fold(0, u32::saturating_add);
    let not_yet_vested = shares.iter().filter(|s| **s == 0).count();

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_shares".to_string(),
        rule_name: "Tenure Shares".to_string(),
        input: serde_json::json!({
            "active_employees": roster.len(),
            "as_of_date": as_of.to_string()
        }),
        output: serde_json::json!({
            "total_shares": total_shares,
            "employees_without_shares": not_yet_vested
        }),
        reasoning: format!(
            "One share per completed month as of {}: {} share(s) across {} employee(s)",
            as_of,
            total_shares,
            roster.len()
        ),
    };

    TenureSharesResult {
        shares,
        total_shares,
        audit_step,
    }
}
