// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::holiday::HolidayScope;
use crate::request::HalfDays;

/// Errors that can occur during domain validation and calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range has its end before its start.
    InvalidDateRange {
        /// The range start date.
        start: time::Date,
        /// The range end date.
        end: time::Date,
    },
    /// A holiday period failed construction-time validation.
    InvalidHolidayPeriod {
        /// Description of the validation failure.
        reason: String,
    },
    /// A holiday period overlaps an existing period of the same scope, name, and year.
    OverlappingHolidayPeriod {
        /// The period name.
        name: String,
        /// The period scope.
        scope: HolidayScope,
        /// The calendar year.
        year: u16,
    },
    /// The seniority policy table is not non-overlapping and gapless over `[0, inf)`.
    PolicyTableInvalid {
        /// Description of the integrity failure.
        reason: String,
    },
    /// No seniority policy tier matches the given years of service.
    ///
    /// This is an internal-consistency error: it cannot fire if the policy
    /// table invariant holds.
    PolicyNotFound {
        /// The years of service that matched no tier.
        years_of_service: u16,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A request carries a non-positive day total.
    InvalidRequestDays {
        /// The invalid day total.
        days: HalfDays,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: start {start} is not before end {end}")
            }
            Self::InvalidHolidayPeriod { reason } => {
                write!(f, "Invalid holiday period: {reason}")
            }
            Self::OverlappingHolidayPeriod { name, scope, year } => {
                write!(
                    f,
                    "Holiday period '{name}' ({scope}) overlaps an existing period in {year}"
                )
            }
            Self::PolicyTableInvalid { reason } => {
                write!(f, "Invalid seniority policy table: {reason}")
            }
            Self::PolicyNotFound { years_of_service } => {
                write!(
                    f,
                    "No seniority policy matches {years_of_service} years of service"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidRequestDays { days } => {
                write!(f, "Request day total must be positive, got {days}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
