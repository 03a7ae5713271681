// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consumption aggregation over a date window.
//!
//! Used by the ledger (to deduct consumed days per management period) and
//! by reporting. A request spanning a period boundary is split between the
//! periods in proportion to the business days on each side, never counted
//! wholly in one.

use leave_ledger_domain::{HalfDays, LeaveRequest, business_days_between, intersect_business_days};
use time::Date;

/// Sums the consumed days of `requests` that fall inside `[start, end)`.
///
/// Only non-deleted requests whose status counts as consumed contribute
/// (`Authorized`, plus `Suspended` when `count_suspended` is set). Partial
/// overlaps are clipped: the request's total is scaled by the share of its
/// business days inside the window, rounded to the nearest half day.
#[must_use]
pub fn sum_authorized(
    requests: &[LeaveRequest],
    start: Date,
    end: Date,
    count_suspended: bool,
) -> HalfDays {
    let Some(window_last) = end.previous_day() else {
        return HalfDays::ZERO;
    };
    if window_last < start {
        return HalfDays::ZERO;
    }

    let mut total: HalfDays = HalfDays::ZERO;

    for request in requests {
        if !request.counts_as_consumed(count_suspended) {
            continue;
        }

        let inside: u32 = intersect_business_days(
            request.start_date,
            request.end_date,
            start,
            window_last,
        );
        if inside == 0 {
            continue;
        }

        let full: u32 = business_days_between(request.start_date, request.end_date);
        let clipped: HalfDays = if full == 0 || inside >= full {
            request.total_days
        } else {
            let before: u32 = match start.previous_day() {
                Some(prev) if prev >= request.start_date => {
                    business_days_between(request.start_date, prev.min(request.end_date))
                }
                _ => 0,
            };
            proportional_slice(request.total_days, before, before + inside, full)
        };

        total = total.saturating_add(clipped);
    }

    total
}

/// Returns the share of `total` allotted to business days `(from, to]` of a
/// request spanning `full` business days.
///
/// Shares are differences of a rounded cumulative allocation, so the slices
/// of any partition of the request telescope back to exactly `total`; a
/// half day is never counted on both sides of a period boundary.
fn proportional_slice(total: HalfDays, from: u32, to: u32, full: u32) -> HalfDays {
    let cumulative = |count: u32| -> i64 {
        let numerator: i64 = total.half_units() * i64::from(count) + i64::from(full) / 2;
        numerator / i64::from(full)
    };
    HalfDays::from_half_units(cumulative(to) - cumulative(from))
}
