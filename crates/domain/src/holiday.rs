// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday periods, non-working days, and exclusion-window aggregation.
//!
//! The calendar unions the business-day date set of every holiday source
//! before counting, so a day covered by more than one source is deducted
//! exactly once from an accrual period.

use crate::calendar::is_business_day;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

/// Maximum length of a single holiday period, in calendar days.
const MAX_PERIOD_SPAN_DAYS: i32 = 30;

/// The scope of a holiday period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayScope {
    /// Institution-wide holiday period.
    General,
    /// Administrative-staff holiday period.
    Administrative,
    /// Holiday period granted to a single employee.
    UserSpecific,
}

impl HolidayScope {
    /// Converts this scope to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Administrative => "Administrative",
            Self::UserSpecific => "UserSpecific",
        }
    }
}

impl std::fmt::Display for HolidayScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named date range excluded from accrual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPeriod {
    name: String,
    scope: HolidayScope,
    year: u16,
    start_date: Date,
    end_date: Date,
}

impl HolidayPeriod {
    /// Creates a new `HolidayPeriod`, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHolidayPeriod` when the name is blank,
    /// the start date is not strictly before the end date, the start date
    /// does not fall in the declared year, or the closed span exceeds 30
    /// calendar days.
    pub fn new(
        name: &str,
        scope: HolidayScope,
        year: u16,
        start_date: Date,
        end_date: Date,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidHolidayPeriod {
                reason: String::from("name cannot be empty"),
            });
        }
        if start_date >= end_date {
            return Err(DomainError::InvalidHolidayPeriod {
                reason: format!("start date {start_date} must be before end date {end_date}"),
            });
        }
        // Stores index periods by the year of their start date; a mismatch
        // would make the period invisible to per-year queries.
        if start_date.year() != i32::from(year) {
            return Err(DomainError::InvalidHolidayPeriod {
                reason: format!("start date {start_date} does not fall in year {year}"),
            });
        }

        let span_days: i32 = end_date.to_julian_day() - start_date.to_julian_day() + 1;
        if span_days > MAX_PERIOD_SPAN_DAYS {
            return Err(DomainError::InvalidHolidayPeriod {
                reason: format!(
                    "period spans {span_days} days, maximum is {MAX_PERIOD_SPAN_DAYS}"
                ),
            });
        }

        Ok(Self {
            name: name.trim().to_string(),
            scope,
            year,
            start_date,
            end_date,
        })
    }

    /// Returns the period name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the period scope.
    #[must_use]
    pub const fn scope(&self) -> HolidayScope {
        self.scope
    }

    /// Returns the calendar year the period belongs to.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the first day of the period.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of the period (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns whether this period's date range intersects another's.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start_date.max(other.start_date) <= self.end_date.min(other.end_date)
    }
}

/// Validates that a candidate period does not overlap an existing period of
/// the same scope, name, and year.
///
/// Enforced at creation and update time by the owning store.
///
/// # Errors
///
/// Returns `DomainError::OverlappingHolidayPeriod` on a conflict.
pub fn validate_no_overlap(
    candidate: &HolidayPeriod,
    existing: &[HolidayPeriod],
) -> Result<(), DomainError> {
    let conflict: bool = existing.iter().any(|period| {
        period.scope == candidate.scope
            && period.year == candidate.year
            && period.name == candidate.name
            && period.intersects(candidate)
    });

    if conflict {
        return Err(DomainError::OverlappingHolidayPeriod {
            name: candidate.name.clone(),
            scope: candidate.scope,
            year: candidate.year,
        });
    }
    Ok(())
}

/// A single calendar date marked non-working (fixed holiday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonWorkingDay {
    date: Date,
    label: String,
}

impl NonWorkingDay {
    /// Creates a new `NonWorkingDay`.
    #[must_use]
    pub fn new(date: Date, label: &str) -> Self {
        Self {
            date,
            label: label.to_string(),
        }
    }

    /// Returns the marked date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Aggregated exclusion windows applicable to one employee's ledger.
///
/// Holds every holiday period (all scopes) plus standalone non-working days
/// relevant to the computation, as a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HolidayCalendar {
    periods: Vec<HolidayPeriod>,
    non_working_days: Vec<NonWorkingDay>,
}

impl HolidayCalendar {
    /// Creates a calendar from holiday periods and non-working days.
    #[must_use]
    pub const fn new(periods: Vec<HolidayPeriod>, non_working_days: Vec<NonWorkingDay>) -> Self {
        Self {
            periods,
            non_working_days,
        }
    }

    /// Counts the business days inside `[start, end]` covered by at least
    /// one exclusion source.
    ///
    /// The union over sources is taken first, so a day claimed by several
    /// overlapping sources is counted once.
    #[must_use]
    pub fn overlap_days(&self, start: Date, end: Date) -> u32 {
        if end < start {
            return 0;
        }

        let mut excluded: BTreeSet<Date> = BTreeSet::new();

        for period in &self.periods {
            let clip_start: Date = period.start_date.max(start);
            let clip_end: Date = period.end_date.min(end);
            if clip_start > clip_end {
                continue;
            }
            let mut day: Date = clip_start;
            loop {
                if is_business_day(day) {
                    excluded.insert(day);
                }
                if day >= clip_end {
                    break;
                }
                match day.next_day() {
                    Some(next) => day = next,
                    None => break,
                }
            }
        }

        for non_working in &self.non_working_days {
            let date: Date = non_working.date();
            if date >= start && date <= end && is_business_day(date) {
                excluded.insert(date);
            }
        }

        u32::try_from(excluded.len()).unwrap_or(u32::MAX)
    }
}
