// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation and license request records.
//!
//! Requests are flat value snapshots of consumption: a date range, a
//! half-day-precise total, a lifecycle status, and approval flags. Deleted
//! requests are flagged, never removed, so historical ledgers stay intact.

use crate::error::DomainError;
use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// A day quantity in half-day units.
///
/// Licenses may consume half days; storing halves as integers keeps every
/// ledger quantity exact and avoids floating-point drift.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct HalfDays(i64);

impl HalfDays {
    /// Zero days.
    pub const ZERO: Self = Self(0);

    /// Creates a quantity from whole days.
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self(days * 2)
    }

    /// Creates a quantity from half-day units.
    #[must_use]
    pub const fn from_half_units(halves: i64) -> Self {
        Self(halves)
    }

    /// Creates a quantity from a business-day count.
    #[must_use]
    pub fn from_business_days(count: u32) -> Self {
        Self(i64::from(count) * 2)
    }

    /// Returns the quantity in half-day units.
    #[must_use]
    pub const fn half_units(self) -> i64 {
        self.0
    }

    /// Returns whether the quantity is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns whether the quantity is strictly negative (a debt).
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Saturating addition.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::ops::Add for HalfDays {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for HalfDays {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Neg for HalfDays {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::fmt::Display for HalfDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            let sign: &str = if self.0 < 0 { "-" } else { "" };
            write!(f, "{sign}{}.5", self.0.abs() / 2)
        }
    }
}

/// The lifecycle status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    /// Created, awaiting supervisor and HR action.
    #[default]
    Pending,
    /// Approved by both approvers; days count as consumed.
    Authorized,
    /// Pushed to a later date by an approver.
    Postponed,
    /// Rejected by an approver.
    Denied,
    /// Interrupted after authorization; days already taken still count.
    Suspended,
}

impl RequestStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Authorized => "Authorized",
            Self::Postponed => "Postponed",
            Self::Denied => "Denied",
            Self::Suspended => "Suspended",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Authorized" => Ok(Self::Authorized),
            "Postponed" => Ok(Self::Postponed),
            "Denied" => Ok(Self::Denied),
            "Suspended" => Ok(Self::Suspended),
            _ => Err(format!("Unknown request status: {s}")),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of consumption record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// A vacation request drawn against accrued days.
    Vacation,
    /// A license (leave permit), possibly for a half day.
    License,
}

impl RequestKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vacation => "Vacation",
            Self::License => "License",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supervisor and HR approval flags.
///
/// `None` means the approver has not acted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Approvals {
    /// The supervisor's decision, if any.
    pub supervisor: Option<bool>,
    /// The HR decision, if any.
    pub hr: Option<bool>,
}

impl Approvals {
    /// Returns whether both approvers have approved.
    #[must_use]
    pub fn fully_approved(&self) -> bool {
        self.supervisor == Some(true) && self.hr == Some(true)
    }
}

/// A vacation or license consumption record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The request's canonical identifier. Identifiers are assigned in
    /// creation order, so the largest id is the most recent request.
    pub id: i64,
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// Vacation or license.
    pub kind: RequestKind,
    /// First day requested (inclusive).
    pub start_date: Date,
    /// Last day requested (inclusive).
    pub end_date: Date,
    /// Total days consumed, in half-day precision.
    pub total_days: HalfDays,
    /// Lifecycle status.
    pub status: RequestStatus,
    /// Supervisor and HR approval flags.
    pub approvals: Approvals,
    /// Start of the management period the request draws on.
    pub period_start: Date,
    /// Exclusive end of the management period the request draws on.
    pub period_end: Date,
    /// Logical-delete flag. Authorized requests are never physically removed.
    pub deleted: bool,
}

impl LeaveRequest {
    /// Creates a new request in `Pending` status with no approvals.
    ///
    /// # Errors
    ///
    /// Returns an error when the end date precedes the start date or the
    /// day total is not positive.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        employee_id: EmployeeId,
        kind: RequestKind,
        start_date: Date,
        end_date: Date,
        total_days: HalfDays,
        period_start: Date,
        period_end: Date,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        if !total_days.is_positive() {
            return Err(DomainError::InvalidRequestDays { days: total_days });
        }

        Ok(Self {
            id,
            employee_id,
            kind,
            start_date,
            end_date,
            total_days,
            status: RequestStatus::Pending,
            approvals: Approvals::default(),
            period_start,
            period_end,
            deleted: false,
        })
    }

    /// Returns whether this request is visible (not logically deleted).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Returns whether this request is authorized with both approvals in.
    #[must_use]
    pub fn fully_authorized(&self) -> bool {
        self.status == RequestStatus::Authorized && self.approvals.fully_approved()
    }

    /// Returns whether this request's days count as consumed.
    ///
    /// Suspended requests represent leave already underway when interrupted;
    /// whether they still count is a configured policy.
    #[must_use]
    pub fn counts_as_consumed(&self, count_suspended: bool) -> bool {
        if self.deleted {
            return false;
        }
        match self.status {
            RequestStatus::Authorized => true,
            RequestStatus::Suspended => count_suspended,
            RequestStatus::Pending | RequestStatus::Postponed | RequestStatus::Denied => false,
        }
    }
}
