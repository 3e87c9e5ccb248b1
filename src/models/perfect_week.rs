//! Perfect-week records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an employee achieved a perfect week: no tardies, always in
/// uniform, and every assigned checklist completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfectWeek {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the week belongs to.
    pub employee_id: String,
    /// First day of the week.
    pub week_start: NaiveDate,
    /// Last day of the week.
    pub week_end: NaiveDate,
    /// Whether the week counted as perfect.
    pub achieved: bool,
}
