//! Performance scores from recognition events.

use crate::models::{AuditStep, PerformanceEvent};

use super::roster::ActiveRoster;

/// The result of scoring the roster's performance events.
#[derive(Debug, Clone)]
pub struct PerformanceScoresResult {
    /// Score per roster employee, aligned with the roster order.
    pub scores: Vec<u32>,
    /// Sum of all scores.
    pub total_score: u32,
    /// Events attributed to employees who are not on the roster.
    pub unmatched_events: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Scores every roster employee by the points of their events.
///
/// Events for employees who are not active are ignored and do not count
/// towards the total score.
pub fn calculate_performance_scores(
    roster: &ActiveRoster<'_>,
    events: &[PerformanceEvent],
    step_number: u32,
) -> PerformanceScoresResult {
    let tally = roster.tally(events, |e| e.employee_id.as_str(), PerformanceEvent::points);
    let total_score = tally.per_employee.iter().copied().fold(0, u32::saturating_add);

    let audit_step = AuditStep {
        step_number,
        rule_id: "performance_scores".to_string(),
        rule_name: "Performance Scores".to_string(),
        input: serde_json::json!({
            "event_count": events.len()
        }),
        output: serde_json::json!({
            "total_score": total_score,
            "unmatched_events": tally.unmatched
        }),
        reasoning: format!(
            "{} event(s) at 1 point each for active employees; {} event(s) ignored",
            total_score, tally.unmatched
        ),
    };

    PerformanceScoresResult {
        scores: tally.per_employee,
        total_score,
        unmatched_events: tally.unmatched,
        audit_step,
    }
}
