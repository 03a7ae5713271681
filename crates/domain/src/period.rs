// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Management period derivation.
//!
//! A management period is one employee-anniversary year: a half-open
//! interval `[start, end)` where `start` is `hire_date + k` years. Periods
//! are derived on demand and never stored; their ascending order is the
//! backbone of the debt ledger.

use crate::calendar::next_anniversary;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// One anniversary year of an employee's tenure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementPeriod {
    index: u16,
    start: Date,
    end: Date,
}

impl ManagementPeriod {
    /// Returns the zero-based period index.
    ///
    /// By construction this equals the employee's whole years of service at
    /// the period start, so it doubles as the policy-table lookup key.
    #[must_use]
    pub const fn index(&self) -> u16 {
        self.index
    }

    /// Returns the period start date (inclusive).
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the period end date (exclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the last day inside the period.
    #[must_use]
    pub fn last_day(&self) -> Date {
        self.end.previous_day().unwrap_or(self.end)
    }

    /// Returns whether a date falls inside the half-open interval.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date < self.end
    }
}

/// Derives the matured management periods from a hire date up to a cutoff.
///
/// A period is matured once its end plus one day has elapsed (`end` strictly
/// before `cutoff`); the still-open current period is excluded. Successive
/// periods share a boundary date, so the sequence is contiguous, ordered,
/// and non-overlapping. A cutoff on or before the hire date yields an empty
/// sequence, not an error.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if an anniversary falls
/// outside the supported calendar range.
pub fn management_periods(
    hire_date: Date,
    cutoff: Date,
) -> Result<Vec<ManagementPeriod>, DomainError> {
    let mut periods: Vec<ManagementPeriod> = Vec::new();
    if cutoff <= hire_date {
        return Ok(periods);
    }

    let mut index: u16 = 0;
    loop {
        let start: Date = next_anniversary(hire_date, index)?;
        let end: Date = next_anniversary(hire_date, index + 1)?;
        if end >= cutoff {
            break;
        }
        periods.push(ManagementPeriod { index, start, end });
        index += 1;
    }

    Ok(periods)
}
