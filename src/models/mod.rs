//! Core data models for the bonus engine.
//!
//! This module contains the records a month's bonus run is computed from,
//! the checklist and attendance records behind perfect weeks, and the
//! calculation result types.

mod attendance;
mod audit;
mod bonus_result;
mod checklist;
mod damage;
mod employee;
mod mileage_entry;
mod perfect_week;
mod performance_event;

pub use attendance::Attendance;
pub use audit::{AuditStep, AuditTrace, AuditWarning, WarningSeverity};
pub use bonus_result::{BonusResult, EmployeePayout, PoolBreakdown};
pub use checklist::{
    ChecklistCompletion, ChecklistItem, CrewRole, DRIVER_CHECKLIST, HELPER_CHECKLIST,
    LEAD_CHECKLIST,
};
pub use damage::Damage;
pub use employee::{Employee, EmployeeRole};
pub use mileage_entry::MileageEntry;
pub use perfect_week::PerfectWeek;
pub use performance_event::{PerformanceEvent, PerformanceEventType};
