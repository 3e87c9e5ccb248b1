//! Damages deduction from the bonus pool.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Damage};

/// The result of totalling damage pool impacts, including the audit step.
#[derive(Debug, Clone)]
pub struct DamagesDeductionResult {
    /// Sum of all pool impacts, unrounded.
    pub damages_deducted: Decimal,
    /// Number of damages the crew reported.
    pub reported_count: usize,
    /// Number of damages the crew did not report.
    pub unreported_count: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Totals the pool impact of the month's damages.
///
/// Reported damages cost their amount; unreported damages cost their amount
/// times `unreported_multiplier`.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::calculate_damages_deduction;
/// use bonus_engine::models::Damage;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let damages = vec![Damage {
///     id: "dmg_001".to_string(),
///     job_id: None,
///     employee_ids: vec![],
///     description: "Dented fridge".to_string(),
///     amount: Decimal::from(100),
///     was_reported: false,
///     date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
/// }];
///
/// let result = calculate_damages_deduction(&damages, Decimal::from(2), 2);
/// assert_eq!(result.damages_deducted, Decimal::from(200));
/// ```
pub fn calculate_damages_deduction(
    damages: &[Damage],
    unreported_multiplier: Decimal,
    step_number: u32,
) -> DamagesDeductionResult {
    let damages_deducted: Decimal = damages
        .iter()
        .map(|d| d.pool_impact(unreported_multiplier))
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let reported_count = damages.iter().filter(|d| d.was_reported).count();
    let unreported_count = damages.len() - reported_count;

    let reasoning = if damages.is_empty() {
        "No damages logged - nothing deducted from the pool".to_string()
    } else {
        format!(
            "{} reported and {} unreported damage(s) (unreported × {}) deduct ${}",
            reported_count,
            unreported_count,
            unreported_multiplier.normalize(),
            damages_deducted.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "damages_deduction".to_string(),
        rule_name: "Damages Deduction".to_string(),
        input: serde_json::json!({
            "damage_count": damages.len(),
            "unreported_multiplier": unreported_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "reported_count": reported_count,
            "unreported_count": unreported_count,
            "damages_deducted": damages_deducted.normalize().to_string()
        }),
        reasoning,
    };

    DamagesDeductionResult {
        damages_deducted,
        reported_count,
        unreported_count,
        audit_step,
    }
}
