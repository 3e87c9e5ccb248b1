//! Monthly bonus pool calculation.
//!
//! Combines a month's snapshot of employee, damage, performance, mileage and
//! perfect-week records into a pool breakdown and one payout per active
//! employee. The calculation is a pure function of its inputs: it performs
//! no I/O, holds no state, and never mutates the snapshot, so independent
//! scenarios can run concurrently.
//!
//! Amounts are carried at full precision and rounded to cents only when
//! written into the result, so shares never compound rounding error.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BonusPolicy;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BonusResult, Damage, Employee, EmployeePayout,
    MileageEntry, PerfectWeek, PerformanceEvent, PoolBreakdown, WarningSeverity,
};

use super::damages::calculate_damages_deduction;
use super::mileage::calculate_mileage_reimbursement;
use super::perfect_week::{PERFECT_WEEK_HOURLY_VALUE, count_perfect_week_hours};
use super::performance::calculate_performance_scores;
use super::pool::{calculate_gross_pool, pro_rata, split_net_pool};
use super::roster::ActiveRoster;
use super::rounding::round_money;
use super::tenure::calculate_tenure_shares;

/// Warning code: damages exceeded the gross pool.
pub const WARNING_NET_POOL_CLAMPED: &str = "NET_POOL_CLAMPED";
/// Warning code: the tenure pool had no shares to go to.
pub const WARNING_UNDISTRIBUTED_TENURE_POOL: &str = "UNDISTRIBUTED_TENURE_POOL";
/// Warning code: the performance pool had no scores to go to.
pub const WARNING_UNDISTRIBUTED_PERFORMANCE_POOL: &str = "UNDISTRIBUTED_PERFORMANCE_POOL";
/// Warning code: records referenced employees who are not active.
pub const WARNING_UNMATCHED_RECORDS: &str = "UNMATCHED_RECORDS";

/// A point-in-time snapshot of one month's records plus the run parameters.
///
/// Damage, performance, mileage and perfect-week collections must already be
/// scoped to the target month. Employees are filtered to active ones here.
#[derive(Debug, Clone, Copy)]
pub struct BonusInput<'a> {
    /// The month's revenue. Callers reject non-positive values.
    pub total_revenue: Decimal,
    /// Pool percentage; the policy default is used when `None`.
    pub pool_percentage: Option<Decimal>,
    /// Date tenure is measured at; today (UTC) when `None`.
    pub as_of_date: Option<NaiveDate>,
    /// All employees, active or not.
    pub employees: &'a [Employee],
    /// Damages logged this month.
    pub damages: &'a [Damage],
    /// Recognition events this month.
    pub performance_events: &'a [PerformanceEvent],
    /// Mileage entries this month.
    pub mileage_entries: &'a [MileageEntry],
    /// Perfect-week records this month.
    pub perfect_weeks: &'a [PerfectWeek],
}

impl<'a> BonusInput<'a> {
    /// Creates an input with no records and policy defaults.
    pub fn new(total_revenue: Decimal) -> Self {
        Self {
            total_revenue,
            pool_percentage: None,
            as_of_date: None,
            employees: &[],
            damages: &[],
            performance_events: &[],
            mileage_entries: &[],
            perfect_weeks: &[],
        }
    }
}

/// Calculates the monthly bonus pool and every active employee's payout.
///
/// 1. Gross pool = revenue × percentage / 100.
/// 2. Damages deducted = Σ pool impact (unreported × multiplier).
/// 3. Net pool = max(0, gross − damages), split 50/50 into tenure and
///    performance pools.
/// 4. Tenure pool shared by completed months of employment.
/// 5. Performance pool shared by recognition points.
/// 6. Mileage added on top of the pool at the policy rate.
/// 7. Perfect-week hours counted; their dollar value is zero.
///
/// A bucket whose total shares or score is zero pays zero to everyone. No
/// input causes an error; range validation is the caller's job.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::{BonusInput, calculate_monthly_bonus};
/// use bonus_engine::config::BonusPolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = BonusInput {
///     as_of_date: NaiveDate::from_ymd_opt(2026, 3, 31),
///     ..BonusInput::new(Decimal::from(10000))
/// };
/// let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
///
/// assert_eq!(result.breakdown.gross_pool, Decimal::from_str("450.00").unwrap());
/// assert_eq!(result.breakdown.tenure_pool, Decimal::from_str("225.00").unwrap());
/// ```
pub fn calculate_monthly_bonus(input: &BonusInput<'_>, policy: &BonusPolicy) -> BonusResult {
    let pool_percentage = input
        .pool_percentage
        .unwrap_or(policy.default_pool_percentage);
    let as_of_date = input
        .as_of_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let roster = ActiveRoster::from_employees(input.employees);
    let mut steps: Vec<AuditStep> = Vec::with_capacity(7);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let gross = calculate_gross_pool(input.total_revenue, pool_percentage, step_number);
    steps.push(gross.audit_step);
    step_number += 1;

    let damages = calculate_damages_deduction(
        input.damages,
        policy.unreported_damage_multiplier,
        step_number,
    );
    steps.push(damages.audit_step);
    step_number += 1;

    let split = split_net_pool(gross.gross_pool, damages.damages_deducted, step_number);
    steps.push(split.audit_step);
    step_number += 1;

    if split.clamped {
        warnings.push(AuditWarning::new(
            WARNING_NET_POOL_CLAMPED,
            format!(
                "Damages of ${} exceed the gross pool of ${}; no pool money is distributed",
                round_money(damages.damages_deducted),
                round_money(gross.gross_pool)
            ),
            WarningSeverity::High,
        ));
    }

    let tenure = calculate_tenure_shares(&roster, as_of_date, step_number);
    steps.push(tenure.audit_step);
    step_number += 1;

    let performance =
        calculate_performance_scores(&roster, input.performance_events, step_number);
    steps.push(performance.audit_step);
    step_number += 1;

    let mileage = calculate_mileage_reimbursement(
        &roster,
        input.mileage_entries,
        policy.mileage_rate,
        step_number,
    );
    steps.push(mileage.audit_step);
    step_number += 1;

    let perfect_weeks = count_perfect_week_hours(&roster, input.perfect_weeks, step_number);
    steps.push(perfect_weeks.audit_step);

    if tenure.total_shares == 0 && split.tenure_pool > Decimal::ZERO {
        warnings.push(AuditWarning::new(
            WARNING_UNDISTRIBUTED_TENURE_POOL,
            format!(
                "No active employee has a completed month; tenure pool of ${} is not paid out",
                round_money(split.tenure_pool)
            ),
            WarningSeverity::Medium,
        ));
    }

    if performance.total_score == 0 && split.performance_pool > Decimal::ZERO {
        warnings.push(AuditWarning::new(
            WARNING_UNDISTRIBUTED_PERFORMANCE_POOL,
            format!(
                "No performance events for active employees; performance pool of ${} is not paid out",
                round_money(split.performance_pool)
            ),
            WarningSeverity::Medium,
        ));
    }

    let unmatched =
        performance.unmatched_events + mileage.unmatched_entries + perfect_weeks.unmatched_weeks;
    if unmatched > 0 {
        warnings.push(AuditWarning::new(
            WARNING_UNMATCHED_RECORDS,
            format!(
                "{} record(s) reference employees who are not active and were ignored \
                 ({} performance event(s), {} mileage entr(ies), {} perfect week(s))",
                unmatched,
                performance.unmatched_events,
                mileage.unmatched_entries,
                perfect_weeks.unmatched_weeks
            ),
            WarningSeverity::Low,
        ));
    }

    let payouts: Vec<EmployeePayout> = roster
        .employees()
        .iter()
        .enumerate()
        .map(|(i, employee)| {
            let tenure_shares = tenure.shares[i];
            let performance_score = performance.scores[i];
            let perfect_week_hours = perfect_weeks.hours[i];

            let tenure_amount = pro_rata(split.tenure_pool, tenure_shares, tenure.total_shares);
            let performance_amount = pro_rata(
                split.performance_pool,
                performance_score,
                performance.total_score,
            );
            let mileage_amount = mileage.amounts[i];
            let perfect_week_amount =
                Decimal::from(perfect_week_hours) * PERFECT_WEEK_HOURLY_VALUE;
            let total_amount = tenure_amount
                .saturating_add(performance_amount)
                .saturating_add(mileage_amount)
                .saturating_add(perfect_week_amount);

            EmployeePayout {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                tenure_months: tenure_shares,
                tenure_shares,
                tenure_amount: round_money(tenure_amount),
                performance_score,
                performance_amount: round_money(performance_amount),
                mileage_amount: round_money(mileage_amount),
                perfect_week_hours,
                perfect_week_amount: round_money(perfect_week_amount),
                total_amount: round_money(total_amount),
            }
        })
        .collect();

    debug!(
        active_employees = roster.len(),
        gross_pool = %gross.gross_pool,
        net_pool = %split.net_pool,
        total_tenure_shares = tenure.total_shares,
        total_performance_score = performance.total_score,
        warnings = warnings.len(),
        "Monthly bonus calculated"
    );

    BonusResult {
        as_of_date,
        breakdown: PoolBreakdown {
            total_revenue: input.total_revenue,
            pool_percentage,
            gross_pool: round_money(gross.gross_pool),
            damages_deducted: round_money(damages.damages_deducted),
            net_pool: round_money(split.net_pool),
            tenure_pool: round_money(split.tenure_pool),
            performance_pool: round_money(split.performance_pool),
            total_tenure_shares: tenure.total_shares,
            total_performance_score: performance.total_score,
        },
        payouts,
        audit_trace: AuditTrace { steps, warnings },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerformanceEventType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn as_of() -> NaiveDate {
        date(2026, 3, 31)
    }

    fn employee(id: &str, start: NaiveDate) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            email: None,
            role: None,
            start_date: start,
            is_active: true,
        }
    }

    fn damage(amount: &str, was_reported: bool) -> Damage {
        Damage {
            id: format!("dmg_{}", amount),
            job_id: None,
            employee_ids: vec![],
            description: String::new(),
            amount: dec(amount),
            was_reported,
            date: date(2026, 3, 10),
        }
    }

    fn event(employee_id: &str) -> PerformanceEvent {
        PerformanceEvent {
            id: format!("pe_{}", employee_id),
            employee_id: employee_id.to_string(),
            event_type: PerformanceEventType::FiveStarReview,
            description: None,
            date: date(2026, 3, 12),
        }
    }

    fn mileage(employee_id: &str, miles: &str) -> MileageEntry {
        MileageEntry {
            id: format!("mi_{}", employee_id),
            employee_id: employee_id.to_string(),
            job_id: None,
            date: date(2026, 3, 5),
            miles: dec(miles),
            amount: Decimal::ZERO,
        }
    }

    fn input_for<'a>(revenue: &str) -> BonusInput<'a> {
        BonusInput {
            as_of_date: Some(as_of()),
            ..BonusInput::new(dec(revenue))
        }
    }

    #[test]
    fn test_default_percentage_without_damages() {
        let result = calculate_monthly_bonus(&input_for("10000"), &BonusPolicy::default());

        assert_eq!(result.breakdown.pool_percentage, dec("4.5"));
        assert_eq!(result.breakdown.gross_pool, dec("450.00"));
        assert_eq!(result.breakdown.net_pool, dec("450.00"));
        assert_eq!(result.breakdown.tenure_pool, dec("225.00"));
        assert_eq!(result.breakdown.performance_pool, dec("225.00"));
        assert_eq!(result.breakdown.gross_pool.to_string(), "450.00");
        assert!(result.payouts.is_empty());
    }

    #[test]
    fn test_unreported_damage_doubles_deduction() {
        let damages = vec![damage("100", false)];
        let input = BonusInput {
            damages: &damages,
            ..input_for("10000")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        assert_eq!(result.breakdown.damages_deducted, dec("200.00"));
        assert_eq!(result.breakdown.net_pool, dec("250.00"));
    }

    #[test]
    fn test_tenure_split_three_to_one() {
        let employees = vec![
            employee("a", date(2025, 12, 31)),
            employee("b", date(2026, 2, 28)),
        ];
        let input = BonusInput {
            employees: &employees,
            ..input_for("10000")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        assert_eq!(result.breakdown.total_tenure_shares, 4);
        assert_eq!(result.payouts[0].tenure_shares, 3);
        assert_eq!(result.payouts[0].tenure_amount, dec("168.75"));
        assert_eq!(result.payouts[1].tenure_shares, 1);
        assert_eq!(result.payouts[1].tenure_amount, dec("56.25"));
    }

    #[test]
    fn test_damages_exceed_pool_but_mileage_still_paid() {
        let employees = vec![employee("a", date(2024, 1, 1))];
        let damages = vec![damage("300", false)];
        let events = vec![event("a")];
        let entries = vec![mileage("a", "20")];
        let input = BonusInput {
            employees: &employees,
            damages: &damages,
            performance_events: &events,
            mileage_entries: &entries,
            ..input_for("10000")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        assert_eq!(result.breakdown.damages_deducted, dec("600.00"));
        assert_eq!(result.breakdown.net_pool, dec("0.00"));

        let payout = &result.payouts[0];
        assert_eq!(payout.tenure_amount, Decimal::ZERO);
        assert_eq!(payout.performance_amount, Decimal::ZERO);
        assert_eq!(payout.mileage_amount, dec("12.00"));
        assert_eq!(payout.total_amount, dec("12.00"));
        assert!(result.audit_trace.has_warning(WARNING_NET_POOL_CLAMPED));
    }

    #[test]
    fn test_inactive_employees_excluded() {
        let mut gone = employee("gone", date(2020, 1, 1));
        gone.is_active = false;
        let employees = vec![employee("a", date(2025, 1, 1)), gone];
        let events = vec![event("gone")];
        let input = BonusInput {
            employees: &employees,
            performance_events: &events,
            ..input_for("10000")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        assert_eq!(result.payouts.len(), 1);
        assert_eq!(result.payouts[0].employee_id, "a");
        assert_eq!(result.payouts[0].tenure_amount, dec("225.00"));
        assert_eq!(result.breakdown.total_performance_score, 0);
        assert!(result.audit_trace.has_warning(WARNING_UNMATCHED_RECORDS));
        assert!(result
            .audit_trace
            .has_warning(WARNING_UNDISTRIBUTED_PERFORMANCE_POOL));
    }

    #[test]
    fn test_zero_shares_pays_zero_tenure_to_everyone() {
        let employees = vec![
            employee("a", date(2026, 3, 15)),
            employee("b", date(2026, 5, 1)),
        ];
        let input = BonusInput {
            employees: &employees,
            ..input_for("10000")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        assert_eq!(result.breakdown.total_tenure_shares, 0);
        assert!(result.payouts.iter().all(|p| p.tenure_amount == Decimal::ZERO));
        assert!(result.audit_trace.has_warning(WARNING_UNDISTRIBUTED_TENURE_POOL));
    }

    #[test]
    fn test_total_is_rounded_sum_of_unrounded_parts() {
        let employees = vec![
            employee("a", date(2026, 2, 1)),
            employee("b", date(2026, 2, 1)),
            employee("c", date(2026, 2, 1)),
        ];
        let entries = vec![mileage("a", "0.005")];
        let input = BonusInput {
            employees: &employees,
            mileage_entries: &entries,
            ..input_for("10000.40")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        let payout = &result.payouts[0];
        // Tenure pool 225.009 in thirds: 75.003 each.
        assert_eq!(payout.tenure_amount, dec("75.00"));
        // 0.005 miles * 0.60 = 0.003
        assert_eq!(payout.mileage_amount, dec("0.00"));
        // 75.003 + 0.003 = 75.006, rounded once.
        assert_eq!(payout.total_amount, dec("75.01"));
    }

    #[test]
    fn test_explicit_percentage_overrides_policy_default() {
        let input = BonusInput {
            pool_percentage: Some(dec("10")),
            ..input_for("10000")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        assert_eq!(result.breakdown.pool_percentage, dec("10"));
        assert_eq!(result.breakdown.gross_pool, dec("1000.00"));
    }

    #[test]
    fn test_perfect_week_hours_tracked_but_unpaid() {
        let employees = vec![employee("a", date(2025, 1, 1))];
        let weeks = vec![PerfectWeek {
            id: "pw_1".to_string(),
            employee_id: "a".to_string(),
            week_start: date(2026, 3, 2),
            week_end: date(2026, 3, 8),
            achieved: true,
        }];
        let input = BonusInput {
            employees: &employees,
            perfect_weeks: &weeks,
            ..input_for("10000")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        assert_eq!(result.payouts[0].perfect_week_hours, 1);
        assert_eq!(result.payouts[0].perfect_week_amount, Decimal::ZERO);
    }

    #[test]
    fn test_audit_trace_records_every_stage_in_order() {
        let result = calculate_monthly_bonus(&input_for("10000"), &BonusPolicy::default());
        let rule_ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();

        assert_eq!(
            rule_ids,
            vec![
                "gross_pool",
                "damages_deduction",
                "net_pool_split",
                "tenure_shares",
                "performance_scores",
                "mileage_reimbursement",
                "perfect_weeks",
            ]
        );
        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let employees = vec![employee("a", date(2024, 6, 1)), employee("b", date(2025, 9, 15))];
        let events = vec![event("a"), event("b"), event("b")];
        let input = BonusInput {
            employees: &employees,
            performance_events: &events,
            ..input_for("23456.78")
        };
        let policy = BonusPolicy::default();

        assert_eq!(
            calculate_monthly_bonus(&input, &policy),
            calculate_monthly_bonus(&input, &policy)
        );
    }

    #[test]
    fn test_policy_values_are_injected() {
        let employees = vec![employee("a", date(2024, 1, 1))];
        let damages = vec![damage("10", false)];
        let entries = vec![mileage("a", "10")];
        let input = BonusInput {
            employees: &employees,
            damages: &damages,
            mileage_entries: &entries,
            ..input_for("10000")
        };
        let policy = BonusPolicy {
            mileage_rate: dec("0.70"),
            default_pool_percentage: dec("5"),
            unreported_damage_multiplier: dec("3"),
            ..BonusPolicy::default()
        };

        let result = calculate_monthly_bonus(&input, &policy);
        assert_eq!(result.breakdown.gross_pool, dec("500.00"));
        assert_eq!(result.breakdown.damages_deducted, dec("30.00"));
        assert_eq!(result.payouts[0].mileage_amount, dec("7.00"));
    }

    #[test]
    fn test_revenue_at_decimal_max_shares_pool_without_overflow() {
        let employees = vec![
            employee("a", date(2000, 1, 1)),
            employee("b", date(2010, 6, 15)),
        ];
        let input = BonusInput {
            total_revenue: Decimal::MAX,
            employees: &employees,
            ..input_for("1")
        };

        let result = calculate_monthly_bonus(&input, &BonusPolicy::default());
        let breakdown = &result.breakdown;
        assert!(breakdown.gross_pool > Decimal::ZERO);
        assert!(breakdown.tenure_pool > Decimal::ZERO);

        // Near the top of the range Decimal keeps fewer fractional digits.
        let paid: Decimal = result.payouts.iter().map(|p| p.tenure_amount).sum();
        assert!((paid - breakdown.tenure_pool).abs() <= Decimal::ONE);
    }

    #[test]
    fn test_extreme_damages_and_miles_saturate() {
        let employees = vec![employee("a", date(2024, 1, 1))];
        let damages = vec![
            Damage {
                amount: Decimal::MAX,
                ..damage("1", false)
            },
            Damage {
                amount: Decimal::MAX,
                ..damage("2", true)
            },
        ];
        let entries = vec![
            MileageEntry {
                miles: Decimal::MAX,
                ..mileage("a", "1")
            },
            MileageEntry {
                id: "mi_a_2".to_string(),
                miles: Decimal::MAX,
                ..mileage("a", "1")
            },
        ];
        let input = BonusInput {
            total_revenue: Decimal::MAX,
            employees: &employees,
            damages: &damages,
            mileage_entries: &entries,
            ..input_for("1")
        };
        let policy = BonusPolicy {
            mileage_rate: dec("1000"),
            ..BonusPolicy::default()
        };

        let result = calculate_monthly_bonus(&input, &policy);
        assert_eq!(result.breakdown.net_pool, Decimal::ZERO);
        assert!(result.audit_trace.has_warning(WARNING_NET_POOL_CLAMPED));
        assert_eq!(result.payouts[0].mileage_amount, Decimal::MAX);
        assert_eq!(result.payouts[0].total_amount, Decimal::MAX);
        assert_eq!(result.total_disbursed(), Decimal::MAX);
    }
}
