//! Active-employee roster and per-employee record tallies.
//!
//! Records reference employees by ID. The roster indexes the active
//! employees once per calculation so each record collection is folded in a
//! single pass instead of being rescanned for every employee.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::Employee;

/// A per-employee total that can absorb one more record.
///
/// Addition saturates so an absurd input caps the total instead of
/// aborting the calculation.
pub trait TallyValue: Copy + Default {
    /// Adds `other` to `self`, saturating at the type's bound.
    fn accumulate(self, other: Self) -> Self;
}

impl TallyValue for u32 {
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl TallyValue for Decimal {
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

/// The employees taking part in a calculation, in the caller's order.
#[derive(Debug, Clone)]
pub struct ActiveRoster<'a> {
    employees: Vec<&'a Employee>,
    ids: HashSet<&'a str>,
}

/// Per-employee totals folded from one record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<V> {
    /// One total per roster employee, aligned with [`ActiveRoster::employees`].
    pub per_employee: Vec<V>,
    /// Records whose employee is not on the roster.
    pub unmatched: usize,
}

impl<'a> ActiveRoster<'a> {
    /// Builds the roster from every employee whose `is_active` flag is set.
    pub fn from_employees(employees: &'a [Employee]) -> Self {
        let employees: Vec<&Employee> = employees.iter().filter(|e| e.is_active).collect();
        let ids = employees.iter().map(|e| e.id.as_str()).collect();
        Self { employees, ids }
    }

    /// The active employees.
    pub fn employees(&self) -> &[&'a Employee] {
        &self.employees
    }

    /// Number of active employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nobody is active.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns true if `employee_id` is on the roster.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.ids.contains(employee_id)
    }

    /// Sums `value` over `records` for each roster employee.
    ///
    /// Employees with no records get `V::default()`.
    pub fn tally<'r, T, V>(
        &self,
        records: &'r [T],
        employee_id: impl Fn(&'r T) -> &'r str,
        value: impl Fn(&'r T) -> V,
    ) -> Tally<V>
    where
        V: TallyValue,
    {
        let mut by_id: HashMap<&str, V> = HashMap::with_capacity(self.ids.len());
        let mut unmatched = 0;

        for record in records {
            let id = employee_id(record);
            if self.contains(id) {
                let total = by_id.entry(id).or_default();
                *total = total.accumulate(value(record));
            } else {
                unmatched += 1;
            }
        }

        let per_employee = self
            .employees
            .iter()
            .map(|e| by_id.get(e.id.as_str()).copied().unwrap_or_default())
            .collect();

        Tally {
            per_employee,
            unmatched,
        }
    }
}
