// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::stores::{
    EmployeeLookup, HolidayStore, NotificationSink, PolicyStore, RequestStore, StoreError,
};
use leave_ledger_domain::{
    EmployeeId, EmployeeRecord, HalfDays, HolidayPeriod, HolidayScope, LeaveRequest,
    NonWorkingDay, RequestKind, RequestStatus, SeniorityPolicy,
};
use std::cell::RefCell;
use time::Date;

pub struct InMemoryEmployees {
    records: Vec<EmployeeRecord>,
}

impl InMemoryEmployees {
    pub fn single(id: i64, hire_date: Date) -> Self {
        Self {
            records: vec![EmployeeRecord::new(EmployeeId::new(id), hire_date)],
        }
    }
}

impl EmployeeLookup for InMemoryEmployees {
    fn find_employee(&self, id: EmployeeId) -> Result<EmployeeRecord, StoreError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .copied()
            .ok_or_else(|| StoreError::NotFound {
                entity: String::from("employee"),
                id: id.to_string(),
            })
    }
}

#[derive(Default)]
pub struct InMemoryHolidays {
    pub periods: Vec<HolidayPeriod>,
    pub user_periods: Vec<(EmployeeId, HolidayPeriod)>,
    pub non_working: Vec<NonWorkingDay>,
}

impl InMemoryHolidays {
    pub fn empty() -> Self {
        Self::default()
    }

    fn scoped(&self, scope: HolidayScope, year: u16) -> Vec<HolidayPeriod> {
        self.periods
            .iter()
            .filter(|period| period.scope() == scope && period.year() == year)
            .cloned()
            .collect()
    }
}

impl HolidayStore for InMemoryHolidays {
    fn general_periods(&self, year: u16) -> Result<Vec<HolidayPeriod>, StoreError> {
        Ok(self.scoped(HolidayScope::General, year))
    }

    fn administrative_periods(&self, year: u16) -> Result<Vec<HolidayPeriod>, StoreError> {
        Ok(self.scoped(HolidayScope::Administrative, year))
    }

    fn user_periods(
        &self,
        employee: EmployeeId,
        year: u16,
    ) -> Result<Vec<HolidayPeriod>, StoreError> {
        Ok(self
            .user_periods
            .iter()
            .filter(|(owner, period)| *owner == employee && period.year() == year)
            .map(|(_, period)| period.clone())
            .collect())
    }

    fn non_working_days(&self, year: u16) -> Result<Vec<NonWorkingDay>, StoreError> {
        Ok(self
            .non_working
            .iter()
            .filter(|day| day.date().year() == i32::from(year))
            .cloned()
            .collect())
    }
}

pub struct InMemoryPolicies {
    tiers: Vec<SeniorityPolicy>,
}

impl InMemoryPolicies {
    pub fn new(tiers: Vec<SeniorityPolicy>) -> Self {
        Self { tiers }
    }

    /// A single unbounded tier granting the same days every year.
    pub fn flat(vacation_days: u16) -> Self {
        Self::new(vec![SeniorityPolicy::new(0, None, vacation_days)])
    }
}

impl PolicyStore for InMemoryPolicies {
    fn seniority_policies(&self) -> Result<Vec<SeniorityPolicy>, StoreError> {
        Ok(self.tiers.clone())
    }
}

#[derive(Default)]
pub struct InMemoryRequests {
    pub records: Vec<LeaveRequest>,
}

impl InMemoryRequests {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(records: Vec<LeaveRequest>) -> Self {
        Self { records }
    }
}

impl RequestStore for InMemoryRequests {
    fn find_request(&self, id: i64) -> Result<LeaveRequest, StoreError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: String::from("request"),
                id: id.to_string(),
            })
    }

    fn requests_for_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.employee_id == employee)
            .cloned()
            .collect())
    }

    fn requests_overlapping(
        &self,
        employee: EmployeeId,
        start: Date,
        end: Date,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|record| {
                record.employee_id == employee
                    && record.start_date.max(start) <= record.end_date.min(end)
            })
            .cloned()
            .collect())
    }

    fn save_request(&mut self, request: &LeaveRequest) -> Result<(), StoreError> {
        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|record| record.id == request.id)
        {
            *existing = request.clone();
        } else {
            self.records.push(request.clone());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub sent: RefCell<Vec<(EmployeeId, String)>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail: true,
        }
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, recipient: EmployeeId, message: &str) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Backend {
                message: String::from("notification channel down"),
            });
        }
        self.sent
            .borrow_mut()
            .push((recipient, message.to_string()));
        Ok(())
    }
}

/// Builds an authorized vacation request with both approvals in.
pub fn authorized_request(
    id: i64,
    employee: i64,
    start: Date,
    end: Date,
    days: HalfDays,
    period_start: Date,
    period_end: Date,
) -> LeaveRequest {
    let mut request: LeaveRequest = LeaveRequest::new(
        id,
        EmployeeId::new(employee),
        RequestKind::Vacation,
        start,
        end,
        days,
        period_start,
        period_end,
    )
    .unwrap();
    request.status = RequestStatus::Authorized;
    request.approvals.supervisor = Some(true);
    request.approvals.hr = Some(true);
    request
}

/// Builds a pending vacation request with no approvals.
pub fn pending_request(
    id: i64,
    employee: i64,
    start: Date,
    end: Date,
    days: HalfDays,
    period_start: Date,
    period_end: Date,
) -> LeaveRequest {
    LeaveRequest::new(
        id,
        EmployeeId::new(employee),
        RequestKind::Vacation,
        start,
        end,
        days,
        period_start,
        period_end,
    )
    .unwrap()
}
