//! Employee model and related types.
//!
//! This module defines the Employee struct and the role an employee holds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The role an employee holds in the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Business owner.
    Owner,
    /// Office or operations manager.
    Manager,
    /// Truck driver.
    Driver,
    /// Crew lead, the customer's primary contact on a job.
    Lead,
    /// Crew helper.
    Helper,
}

/// Represents an employee whose records feed the monthly bonus pool.
///
/// Tenure is derived from `start_date` at calculation time and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name used on payout reports.
    pub name: String,
    /// Contact email, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The employee's role, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<EmployeeRole>,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// Only active employees participate in a bonus calculation.
    pub is_active: bool,
}
