// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure calendar-date utilities for the accrual ledger.
//!
//! All arithmetic operates on `time::Date` values: calendar dates with no
//! time component and no timezone. Holiday exclusion is a separate deduction
//! layer on top of these utilities and is deliberately not known here.

use crate::error::DomainError;
use time::{Date, Month, Weekday};

/// Returns whether a date falls on a business day (Monday through Friday).
#[must_use]
pub const fn is_business_day(date: Date) -> bool {
    !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Counts the business days (Mon-Fri) in the closed interval `[start, end]`.
///
/// Returns 0 when `end < start`. Holidays are not considered.
#[must_use]
pub fn business_days_between(start: Date, end: Date) -> u32 {
    if end < start {
        return 0;
    }

    let mut count: u32 = 0;
    let mut day: Date = start;
    loop {
        if is_business_day(day) {
            count += 1;
        }
        if day >= end {
            break;
        }
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }
    count
}

/// Collects every business day in the closed interval `[start, end]`.
///
/// Returns an empty vector when `end < start`.
#[must_use]
pub fn business_days_in(start: Date, end: Date) -> Vec<Date> {
    let mut days: Vec<Date> = Vec::new();
    if end < start {
        return days;
    }

    let mut day: Date = start;
    loop {
        if is_business_day(day) {
            days.push(day);
        }
        if day >= end {
            break;
        }
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

/// Counts the business days in the overlap of two closed intervals.
///
/// Returns 0 when the intervals are disjoint.
#[must_use]
pub fn intersect_business_days(a_start: Date, a_end: Date, b_start: Date, b_end: Date) -> u32 {
    let start: Date = a_start.max(b_start);
    let end: Date = a_end.min(b_end);
    if start > end {
        return 0;
    }
    business_days_between(start, end)
}

/// Computes the calendar anniversary of a date, `years` years later.
///
/// A February 29 source date maps to February 28 in non-leap target years.
/// This is the single leap-day policy for the whole system; every period
/// boundary is derived through this function so periods stay contiguous.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` when the target year falls
/// outside the supported calendar range.
pub fn next_anniversary(date: Date, years: u16) -> Result<Date, DomainError> {
    let target_year: i32 = date.year() + i32::from(years);

    let day: u8 = if date.month() == Month::February
        && date.day() == 29
        && !time::util::is_leap_year(target_year)
    {
        28
    } else {
        date.day()
    };

    Date::from_calendar_date(target_year, date.month(), day).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("adding {years} years to {date}"),
        }
    })
}
