// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::stores::StoreError;
use leave_ledger_domain::{DomainError, EmployeeId};
use time::Date;

/// Errors that can occur during ledger computation and request handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A collaborator store failed.
    Store(StoreError),
    /// The employee does not exist in the HR subsystem.
    EmployeeNotFound {
        /// The employee identifier that missed.
        employee: EmployeeId,
    },
    /// No ledger entry matches a request's stored management period.
    RequestPeriodNotFound {
        /// The request identifier.
        request: i64,
        /// The period end date recorded on the request.
        period_end: Date,
    },
    /// A request was denied by validation.
    RequestDenied {
        /// The human-readable denial reason.
        reason: String,
    },
    /// The ledger computation hit a data-integrity failure.
    ///
    /// No partial ledger is returned: a skipped period would corrupt every
    /// subsequent carry-forward.
    InternalConsistency {
        /// The period index being processed.
        period_index: u16,
        /// The period start date.
        period_start: Date,
        /// The period end date.
        period_end: Date,
        /// The underlying domain failure.
        source: DomainError,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Store(err) => write!(f, "Store failure: {err}"),
            Self::EmployeeNotFound { employee } => {
                write!(f, "Employee {employee} not found")
            }
            Self::RequestPeriodNotFound {
                request,
                period_end,
            } => {
                write!(
                    f,
                    "No ledger entry matches request {request} (period ending {period_end})"
                )
            }
            Self::RequestDenied { reason } => write!(f, "Request denied: {reason}"),
            Self::InternalConsistency {
                period_index,
                period_start,
                period_end,
                source,
            } => {
                write!(
                    f,
                    "Ledger integrity failure in period {period_index} [{period_start}, {period_end}): {source}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
