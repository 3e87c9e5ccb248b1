//! Mileage reimbursement.
//!
//! Mileage is a separate budget line: it is paid on top of the bonus pool
//! and never drawn from it.

use rust_decimal::Decimal;

use crate::models::{AuditStep, MileageEntry};

use super::roster::ActiveRoster;

/// The result of pricing the roster's mileage.
#[derive(Debug, Clone)]
pub struct MileageReimbursementResult {
    /// Reimbursement per roster employee, unrounded, aligned with the roster order.
    pub amounts: Vec<Decimal>,
    /// Miles driven by roster employees.
    pub total_miles: Decimal,
    /// Entries for employees who are not on the roster.
    pub unmatched_entries: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices each roster employee's miles at `mileage_rate`.
///
/// The stored `amount` on each entry is not used; miles are repriced at the
/// policy rate in force for the calculation.
pub fn calculate_mileage_reimbursement(
    roster: &ActiveRoster<'_>,
    entries: &[MileageEntry],
    mileage_rate: Decimal,
    step_number: u32,
) -> MileageReimbursementResult {
    let tally = roster.tally(entries, |e| e.employee_id.as_str(), |e| e.miles);
    let total_miles = tally
        .per_employee
        .iter()
        .copied()
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let amounts: Vec<Decimal> = tally
        .per_employee
        .iter()
        .map(|miles| miles.saturating_mul(mileage_rate))
        .collect();
    let total_amount = total_miles.saturating_mul(mileage_rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "mileage_reimbursement".to_string(),
        rule_name: "Mileage Reimbursement".to_string(),
        input: serde_json::json!({
            "entry_count": entries.len(),
            "mileage_rate": mileage_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_miles": total_miles.normalize().to_string(),
            "total_amount": total_amount.normalize().to_string(),
            "unmatched_entries": tally.unmatched
        }),
        reasoning: format!(
            "{} mile(s) × ${}/mile = ${}, paid outside the bonus pool",
            total_miles.normalize(),
            mileage_rate.normalize(),
            total_amount.normalize()
        ),
    };

    MileageReimbursementResult {
        amounts,
        total_miles,
        unmatched_entries: tally.unmatched,
        audit_step,
    }
}
