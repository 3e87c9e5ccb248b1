//! Perfect-week evaluation and bonus hours.
//!
//! A perfect week is one in which an employee worked at least one day, was
//! never tardy, was always in uniform, and completed every checklist they
//! were assigned. Each achieved week earns one bonus hour. The hours are
//! tracked on payouts but carry no dollar value yet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Attendance, AuditStep, ChecklistCompletion, PerfectWeek};

use super::roster::ActiveRoster;

/// Bonus hours earned per achieved perfect week.
pub const BONUS_HOURS_PER_PERFECT_WEEK: u32 = 1;

/// Dollar value of one perfect-week bonus hour.
///
/// Zero until an hourly rate is added to the bonus policy.
pub const PERFECT_WEEK_HOURLY_VALUE: Decimal = Decimal::ZERO;

/// The outcome of evaluating one employee's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfectWeekCheck {
    /// Whether the week was perfect.
    pub achieved: bool,
    /// Attendance records in the week.
    pub days_worked: usize,
    /// Days the employee arrived after the cutoff.
    pub tardy_days: usize,
    /// Days the employee was out of uniform.
    pub uniform_violations: usize,
    /// Checklists with at least one item missing.
    pub incomplete_checklists: usize,
}

/// The result of counting perfect-week hours for the roster.
#[derive(Debug, Clone)]
pub struct PerfectWeekHoursResult {
    /// Bonus hours per roster employee, aligned with the roster order.
    pub hours: Vec<u32>,
    /// Sum of all bonus hours.
    pub total_hours: u32,
    /// Perfect-week records for employees who are not on the roster.
    pub unmatched_weeks: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Evaluates one employee's week of attendance and checklist completions.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::check_perfect_week;
///
/// // No attendance means the employee did not work, so the week is not perfect.
/// let check = check_perfect_week(&[], &[]);
/// assert!(!check.achieved);
/// ```
pub fn check_perfect_week(
    attendance: &[Attendance],
    completions: &[ChecklistCompletion],
) -> PerfectWeekCheck {
    let days_worked = attendance.len();
    let tardy_days = attendance.iter().filter(|a| a.is_tardy).count();
    let uniform_violations = attendance.iter().filter(|a| !a.in_uniform).count();
    let incomplete_checklists = completions.iter().filter(|c| !c.is_complete()).count();

    PerfectWeekCheck {
        achieved: days_worked > 0
            && tardy_days == 0
            && uniform_violations == 0
            && incomplete_checklists == 0,
        days_worked,
        tardy_days,
        uniform_violations,
        incomplete_checklists,
    }
}

/// Counts achieved perfect weeks as bonus hours for every roster employee.
pub fn count_perfect_week_hours(
    roster: &ActiveRoster<'_>,
    weeks: &[PerfectWeek],
    step_number: u32,
) -> PerfectWeekHoursResult {
    let tally = roster.tally(
        weeks,
        |w| w.employee_id.as_str(),
        |w| {
            if w.achieved {
                BONUS_HOURS_PER_PERFECT_WEEK
            } else {
                0
            }
        },
    );
    let total_hours = tally.per_employee.iter().copied().fold(0, u32::saturating_add);

    let audit_step = AuditStep {
        step_number,
        rule_id: "perfect_weeks".to_string(),
        rule_name: "Perfect Weeks".to_string(),
        input: serde_json::json!({
            "week_count": weeks.len()
        }),
        output: serde_json::json!({
            "total_hours": total_hours,
            "hourly_value": PERFECT_WEEK_HOURLY_VALUE.to_string(),
            "unmatched_weeks": tally.unmatched
        }),
        reasoning: format!(
            "{} bonus hour(s) from achieved perfect weeks, valued at ${} per hour",
            total_hours, PERFECT_WEEK_HOURLY_VALUE
        ),
    };

    PerfectWeekHoursResult {
        hours: tally.per_employee,
        total_hours,
        unmatched_weeks: tally.unmatched,
        audit_step,
    }
}
