// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The debt ledger engine.
//!
//! Walks an employee's tenure from hire date to a cutoff in successive
//! management periods and produces one entry per period: days accrued,
//! holiday deductions, consumption, and the balance carried forward. The
//! ledger is recomputed on demand from persisted data rather than
//! incrementally maintained; tenures are bounded, so the O(years) walk is
//! cheap and immune to incremental-update drift.
//!
//! ## Invariants
//!
//! - Entries are processed and emitted in ascending period order.
//! - `entries[k].debt_carried_in == entries[k - 1].debt_at_end`.
//! - `available = accrued - holiday - consumed + carried_in`, and
//!   `debt_at_end` is that same balance (debt is simply a negative balance).
//! - A policy-resolution failure aborts the whole computation; no partial
//!   ledger is ever returned.

use crate::config::LedgerConfig;
use crate::consumption::sum_authorized;
use crate::error::CoreError;
use crate::stores::{EmployeeLookup, HolidayStore, PolicyStore, RequestStore, StoreError};
use leave_ledger_domain::{
    EmployeeId, EmployeeRecord, HalfDays, HolidayCalendar, HolidayPeriod, LeaveRequest,
    ManagementPeriod, NonWorkingDay, PolicyTable, management_periods,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// One management period's accrual, deductions, and balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtLedgerEntry {
    /// Zero-based period index (whole years of service at period start).
    pub period_index: u16,
    /// Period start date (inclusive).
    pub start_date: Date,
    /// Period end date (exclusive).
    pub end_date: Date,
    /// Days accrued per the seniority policy for this period.
    pub accrued_days: HalfDays,
    /// Business days deducted for holiday-period overlap.
    pub holiday_deducted_days: HalfDays,
    /// Days consumed by authorized requests inside this period.
    pub consumed_days: HalfDays,
    /// Balance carried in from the previous period (zero for the first).
    pub debt_carried_in: HalfDays,
    /// Net days available at period end. Negative means debt.
    pub available_days: HalfDays,
    /// Balance carried to the next period; always equals `available_days`.
    pub debt_at_end: HalfDays,
}

/// Running totals across a whole ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebtLedgerSummary {
    /// Total days accrued across all periods.
    pub total_accrued: HalfDays,
    /// Total holiday deductions across all periods.
    pub total_holiday_deducted: HalfDays,
    /// Total consumption across all periods.
    pub total_consumed: HalfDays,
    /// The final balance (last entry's `available_days`; zero when empty).
    pub balance: HalfDays,
}

/// The ordered per-period entries plus the running summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebtLedger {
    /// Per-period snapshots in ascending period order.
    pub entries: Vec<DebtLedgerEntry>,
    /// Totals over the whole tenure.
    pub summary: DebtLedgerSummary,
}

impl DebtLedger {
    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn last_entry(&self) -> Option<&DebtLedgerEntry> {
        self.entries.last()
    }
}

/// Computes debt ledgers from collaborator snapshots.
pub struct LedgerEngine<'a> {
    employees: &'a dyn EmployeeLookup,
    holidays: &'a dyn HolidayStore,
    policies: &'a dyn PolicyStore,
    requests: &'a dyn RequestStore,
    config: LedgerConfig,
}

impl<'a> LedgerEngine<'a> {
    /// Creates an engine over the given collaborators.
    pub const fn new(
        employees: &'a dyn EmployeeLookup,
        holidays: &'a dyn HolidayStore,
        policies: &'a dyn PolicyStore,
        requests: &'a dyn RequestStore,
        config: LedgerConfig,
    ) -> Self {
        Self {
            employees,
            holidays,
            policies,
            requests,
            config,
        }
    }

    /// Returns the configuration this engine applies.
    #[must_use]
    pub const fn config(&self) -> LedgerConfig {
        self.config
    }

    /// Computes the debt ledger for an employee up to a cutoff date.
    ///
    /// A cutoff on or before the hire date yields an empty ledger. Deleted
    /// requests never contribute to consumption.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmployeeNotFound` when the employee is absent,
    /// `CoreError::InternalConsistency` when a period has no matching policy
    /// tier (the whole computation is aborted), and store or domain errors
    /// as they arise.
    pub fn compute(&self, employee_id: EmployeeId, cutoff: Date) -> Result<DebtLedger, CoreError> {
        let employee: EmployeeRecord =
            self.employees
                .find_employee(employee_id)
                .map_err(|err| match err {
                    StoreError::NotFound { .. } => CoreError::EmployeeNotFound {
                        employee: employee_id,
                    },
                    other => CoreError::Store(other),
                })?;

        let periods: Vec<ManagementPeriod> = management_periods(employee.hire_date, cutoff)?;
        if periods.is_empty() {
            tracing::debug!(
                employee = %employee_id,
                %cutoff,
                "no matured management periods, returning empty ledger"
            );
            return Ok(DebtLedger::default());
        }

        let table: PolicyTable = PolicyTable::new(self.policies.seniority_policies()?)?;
        let calendar: HolidayCalendar = self.load_holiday_calendar(employee_id, &periods)?;
        let history: Vec<LeaveRequest> = self.requests.requests_for_employee(employee_id)?;

        let mut entries: Vec<DebtLedgerEntry> = Vec::with_capacity(periods.len());
        let mut summary: DebtLedgerSummary = DebtLedgerSummary::default();
        let mut carried: HalfDays = HalfDays::ZERO;

        for period in &periods {
            let policy = table.resolve(period.index()).map_err(|source| {
                tracing::error!(
                    employee = %employee_id,
                    period_index = period.index(),
                    period_start = %period.start(),
                    period_end = %period.end(),
                    %source,
                    "aborting ledger computation: no policy tier for period"
                );
                CoreError::InternalConsistency {
                    period_index: period.index(),
                    period_start: period.start(),
                    period_end: period.end(),
                    source,
                }
            })?;

            let accrued: HalfDays = HalfDays::from_days(i64::from(policy.vacation_days));
            let holiday_deducted: HalfDays = HalfDays::from_business_days(
                calendar.overlap_days(period.start(), period.last_day()),
            );
            let consumed: HalfDays = sum_authorized(
                &history,
                period.start(),
                period.end(),
                self.config.count_suspended,
            );

            let available: HalfDays = accrued - holiday_deducted - consumed + carried;

            tracing::debug!(
                employee = %employee_id,
                period_index = period.index(),
                %accrued,
                %holiday_deducted,
                %consumed,
                carried_in = %carried,
                %available,
                "ledger period computed"
            );

            entries.push(DebtLedgerEntry {
                period_index: period.index(),
                start_date: period.start(),
                end_date: period.end(),
                accrued_days: accrued,
                holiday_deducted_days: holiday_deducted,
                consumed_days: consumed,
                debt_carried_in: carried,
                available_days: available,
                debt_at_end: available,
            });

            summary.total_accrued = summary.total_accrued.saturating_add(accrued);
            summary.total_holiday_deducted =
                summary.total_holiday_deducted.saturating_add(holiday_deducted);
            summary.total_consumed = summary.total_consumed.saturating_add(consumed);

            carried = available;
        }

        summary.balance = carried;

        Ok(DebtLedger { entries, summary })
    }

    /// Aggregates every holiday source applicable to the employee across the
    /// calendar years the periods span.
    fn load_holiday_calendar(
        &self,
        employee_id: EmployeeId,
        periods: &[ManagementPeriod],
    ) -> Result<HolidayCalendar, CoreError> {
        let Some(first) = periods.first() else {
            return Ok(HolidayCalendar::default());
        };
        let Some(last) = periods.last() else {
            return Ok(HolidayCalendar::default());
        };

        let mut holiday_periods: Vec<HolidayPeriod> = Vec::new();
        let mut non_working_days: Vec<NonWorkingDay> = Vec::new();

        for year in first.start().year()..=last.end().year() {
            let Ok(year) = u16::try_from(year) else {
                continue;
            };
            holiday_periods.extend(self.holidays.general_periods(year)?);
            holiday_periods.extend(self.holidays.administrative_periods(year)?);
            holiday_periods.extend(self.holidays.user_periods(employee_id, year)?);
            non_working_days.extend(self.holidays.non_working_days(year)?);
        }

        Ok(HolidayCalendar::new(holiday_periods, non_working_days))
    }
}
