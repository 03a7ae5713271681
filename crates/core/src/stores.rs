// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator interfaces consumed by the ledger engine and workflow.
//!
//! The core never owns persistence, identity lookup, or notification
//! transport; it reads flat value snapshots through these traits and writes
//! request records back through `RequestStore`. Implementations live with
//! the surrounding application.

use leave_ledger_domain::{
    EmployeeId, EmployeeRecord, HolidayPeriod, LeaveRequest, NonWorkingDay, SeniorityPolicy,
};
use thiserror::Error;
use time::Date;

/// Errors surfaced by collaborator implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// The kind of record looked up.
        entity: String,
        /// The identifier that missed.
        id: String,
    },
    /// The backing store failed.
    #[error("store backend failure: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },
}

/// Read access to employee identity data owned by the HR subsystem.
pub trait EmployeeLookup {
    /// Finds an employee snapshot by canonical id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the employee does not exist.
    fn find_employee(&self, id: EmployeeId) -> Result<EmployeeRecord, StoreError>;
}

/// Read access to holiday periods and non-working days.
///
/// Results are read-only snapshots for a single calendar year; the engine
/// aggregates across the years a ledger spans.
pub trait HolidayStore {
    /// Lists institution-wide holiday periods for a year.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn general_periods(&self, year: u16) -> Result<Vec<HolidayPeriod>, StoreError>;

    /// Lists administrative holiday periods for a year.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn administrative_periods(&self, year: u16) -> Result<Vec<HolidayPeriod>, StoreError>;

    /// Lists holiday periods granted to a single employee for a year.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn user_periods(
        &self,
        employee: EmployeeId,
        year: u16,
    ) -> Result<Vec<HolidayPeriod>, StoreError>;

    /// Lists standalone non-working days for a year.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn non_working_days(&self, year: u16) -> Result<Vec<NonWorkingDay>, StoreError>;
}

/// Read access to the seniority policy tiers.
pub trait PolicyStore {
    /// Lists every seniority policy tier.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn seniority_policies(&self) -> Result<Vec<SeniorityPolicy>, StoreError>;
}

/// Read and write access to request records.
///
/// `save_request` must run inside the store's mutual-exclusion boundary for
/// the affected request (a transaction or row lock), so a validate-and-save
/// sequence cannot interleave with a concurrent approval.
pub trait RequestStore {
    /// Finds a single request by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the request does not exist.
    fn find_request(&self, id: i64) -> Result<LeaveRequest, StoreError>;

    /// Lists every request record for an employee, including deleted ones.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn requests_for_employee(&self, employee: EmployeeId)
    -> Result<Vec<LeaveRequest>, StoreError>;

    /// Lists an employee's requests whose date range intersects `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn requests_overlapping(
        &self,
        employee: EmployeeId,
        start: Date,
        end: Date,
    ) -> Result<Vec<LeaveRequest>, StoreError>;

    /// Persists a request record, replacing any record with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store fails.
    fn save_request(&mut self, request: &LeaveRequest) -> Result<(), StoreError>;
}

/// Fire-and-forget notification delivery.
///
/// Failures never affect a ledger or validation result; the workflow logs
/// them and moves on.
pub trait NotificationSink {
    /// Sends a message to a recipient.
    ///
    /// # Errors
    ///
    /// Returns an error when delivery fails; callers log and ignore it.
    fn notify(&self, recipient: EmployeeId, message: &str) -> Result<(), StoreError>;
}
