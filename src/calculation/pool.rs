//! Gross pool, net pool and the tenure/performance split.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::AuditStep;

/// The result of computing the gross pool, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossPoolResult {
    /// Revenue times pool percentage, unrounded.
    pub gross_pool: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The net pool after damages and its two halves.
#[derive(Debug, Clone)]
pub struct PoolSplitResult {
    /// Gross pool less damages, floored at zero. Unrounded.
    pub net_pool: Decimal,
    /// Half of the net pool, shared by tenure.
    pub tenure_pool: Decimal,
    /// Half of the net pool, shared by performance.
    pub performance_pool: Decimal,
    /// True when damages exceeded the gross pool and the net pool was floored.
    pub clamped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the gross bonus pool: `total_revenue * pool_percentage / 100`.
///
/// Inputs are not range-checked; callers validate revenue and percentage.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::calculate_gross_pool;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_gross_pool(
///     Decimal::from(10000),
///     Decimal::from_str("4.5").unwrap(),
///     1,
/// );
/// assert_eq!(result.gross_pool, Decimal::from(450));
/// ```
pub fn calculate_gross_pool(
    total_revenue: Decimal,
    pool_percentage: Decimal,
    step_number: u32,
) -> GrossPoolResult {
    let gross_pool = match total_revenue.checked_mul(pool_percentage) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        None => (total_revenue / Decimal::ONE_HUNDRED).saturating_mul(pool_percentage),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pool".to_string(),
        rule_name: "Gross Pool".to_string(),
        input: serde_json::json!({
            "total_revenue": total_revenue.normalize().to_string(),
            "pool_percentage": pool_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_pool": gross_pool.normalize().to_string()
        }),
        reasoning: format!(
            "${} revenue × {}% = ${}",
            total_revenue.normalize(),
            pool_percentage.normalize(),
            gross_pool.normalize()
        ),
    };

    GrossPoolResult {
        gross_pool,
        audit_step,
    }
}

/// Deducts damages from the gross pool and splits the remainder 50/50.
///
/// The net pool never goes negative: damages beyond the gross pool are
/// absorbed, not carried into negative compensation.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::split_net_pool;
/// use rust_decimal::Decimal;
///
/// let split = split_net_pool(Decimal::from(450), Decimal::from(200), 3);
/// assert_eq!(split.net_pool, Decimal::from(250));
/// assert_eq!(split.tenure_pool, Decimal::from(125));
/// assert_eq!(split.performance_pool, Decimal::from(125));
/// assert!(!split.clamped);
/// ```
pub fn split_net_pool(
    gross_pool: Decimal,
    damages_deducted: Decimal,
    step_number: u32,
) -> PoolSplitResult {
    let remainder = gross_pool.saturating_sub(damages_deducted);
    let clamped = remainder < Decimal::ZERO;
    let net_pool = remainder.max(Decimal::ZERO);

    let two = Decimal::TWO;
    let tenure_pool = net_pool / two;
    let performance_pool = net_pool / two;

    debug!(
        gross_pool = %gross_pool,
        damages_deducted = %damages_deducted,
        net_pool = %net_pool,
        clamped,
        "Net pool split"
    );

    let reasoning = if clamped {
        format!(
            "Damages ${} exceed gross pool ${}; net pool floored at $0",
            damages_deducted.normalize(),
            gross_pool.normalize()
        )
    } else {
        format!(
            "${} - ${} = ${}, split 50/50 into ${} tenure and ${} performance",
            gross_pool.normalize(),
            damages_deducted.normalize(),
            net_pool.normalize(),
            tenure_pool.normalize(),
            performance_pool.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pool_split".to_string(),
        rule_name: "Net Pool Split".to_string(),
        input: serde_json::json!({
            "gross_pool": gross_pool.normalize().to_string(),
            "damages_deducted": damages_deducted.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_pool": net_pool.normalize().to_string(),
            "tenure_pool": tenure_pool.normalize().to_string(),
            "performance_pool": performance_pool.normalize().to_string(),
            "clamped": clamped
        }),
        reasoning,
    };

    PoolSplitResult {
        net_pool,
        tenure_pool,
        performance_pool,
        clamped,
        audit_step,
    }
}

/// Returns `part / total` of `pool`, or zero when `total` is zero.
///
/// Multiplies before dividing so exact splits stay exact.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::pro_rata;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pool = Decimal::from(225);
/// assert_eq!(pro_rata(pool, 3, 4), Decimal::from_str("168.75").unwrap());
/// assert_eq!(pro_rata(pool, 0, 0), Decimal::ZERO);
/// ```
pub fn pro_rata(pool: Decimal, part: u32, total: u32) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    let (part, total) = (Decimal::from(part), Decimal::from(total));
    match pool.checked_mul(part) {
        Some(product) => product / total,
        // part <= total, so dividing first cannot overflow
        None => (pool / total).saturating_mul(part),
    }
}
