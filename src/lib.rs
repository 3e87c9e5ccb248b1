//! Monthly bonus pool engine for a moving company's staff operations.
//!
//! This crate combines a month's employee, damage, performance, mileage and
//! perfect-week records into a bonus pool breakdown and per-employee payouts,
//! with decimal arithmetic and an audit trail for every calculation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
