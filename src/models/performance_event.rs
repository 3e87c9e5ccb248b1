//! Performance recognition events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of recognition an employee received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceEventType {
    /// A five-star customer review naming the employee.
    FiveStarReview,
    /// A customer singled the employee out for praise.
    CustomerCallout,
    /// A crewmate singled the employee out for praise.
    CrewCallout,
}

/// A recognition event attributed to one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEvent {
    /// Unique identifier for the event.
    pub id: String,
    /// The employee being recognised.
    pub employee_id: String,
    /// The kind of recognition.
    #[serde(rename = "type")]
    pub event_type: PerformanceEventType,
    /// Free-form notes.
    #[serde(default)]
    pub description: Option<String>,
    /// The date of the event.
    pub date: NaiveDate,
}

impl PerformanceEvent {
    /// Points this event contributes to the employee's performance score.
    ///
    /// Every event type is worth one point.
    pub fn points(&self) -> u32 {
        match self.event_type {
            PerformanceEventType::FiveStarReview
            | PerformanceEventType::CustomerCallout
            | PerformanceEventType::CrewCallout => 1,
        }
    }
}
