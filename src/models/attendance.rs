//! Daily attendance records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One employee's attendance on one working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The working day.
    pub date: NaiveDate,
    /// When the employee arrived at the warehouse, if recorded.
    #[serde(default)]
    pub arrival_time: Option<NaiveTime>,
    /// Whether the arrival was after the tardy cutoff.
    #[serde(default)]
    pub is_tardy: bool,
    /// Whether the employee showed up in uniform.
    pub in_uniform: bool,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Attendance {
    /// Logs an attendance record, deriving tardiness from `tardy_cutoff`.
    ///
    /// Arriving exactly at the cutoff is on time. A record without an
    /// arrival time is never tardy.
    ///
    /// # Examples
    ///
    /// ```
    /// use bonus_engine::models::Attendance;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let cutoff = NaiveTime::from_hms_opt(7, 15, 0).unwrap();
    /// let record = Attendance::log(
    ///     "att_001",
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     NaiveTime::from_hms_opt(7, 16, 0),
    ///     true,
    ///     cutoff,
    /// );
    /// assert!(record.is_tardy);
    /// ```
    pub fn log(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        arrival_time: Option<NaiveTime>,
        in_uniform: bool,
        tardy_cutoff: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            date,
            arrival_time,
            is_tardy: arrival_time.is_some_and(|arrival| arrival > tardy_cutoff),
            in_uniform,
            notes: None,
        }
    }
}
