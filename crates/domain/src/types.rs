// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// The canonical numeric identifier of an employee.
///
/// The ledger never holds live employee object graphs; this identifier plus
/// a hire date is everything the core reads from the HR subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A flat employee snapshot as read from the HR subsystem.
///
/// The hire date is immutable once set by HR and anchors every management
/// period boundary for the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's canonical identifier.
    pub id: EmployeeId,
    /// The employee's hire date.
    pub hire_date: Date,
}

impl EmployeeRecord {
    /// Creates a new `EmployeeRecord`.
    #[must_use]
    pub const fn new(id: EmployeeId, hire_date: Date) -> Self {
        Self { id, hire_date }
    }
}
