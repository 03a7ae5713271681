// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod holiday;
mod period;
mod policy;
mod request;
mod types;

pub use calendar::{
    business_days_between, business_days_in, intersect_business_days, is_business_day,
    next_anniversary,
};
pub use error::DomainError;
pub use holiday::{HolidayCalendar, HolidayPeriod, HolidayScope, NonWorkingDay, validate_no_overlap};
pub use period::{ManagementPeriod, management_periods};
pub use policy::{PolicyTable, SeniorityPolicy};
pub use request::{Approvals, HalfDays, LeaveRequest, RequestKind, RequestStatus};
pub use types::{EmployeeId, EmployeeRecord};
