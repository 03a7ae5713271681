// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request validation against the debt ledger.
//!
//! The validator is a pure read/decision layer: it never mutates request
//! state or dispatches notifications. Callers act on the returned decision
//! inside their own mutual-exclusion boundary.

use crate::error::CoreError;
use crate::ledger::{DebtLedger, DebtLedgerEntry, LedgerEngine};
use crate::stores::RequestStore;
use leave_ledger_domain::{EmployeeId, HalfDays, LeaveRequest, RequestStatus};
use serde::{Deserialize, Serialize};
use time::Date;

/// The eligibility state of an employee's request history.
///
/// Classified across requests, not per individual request: the gate is the
/// latest non-deleted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityState {
    /// The employee has no visible requests.
    NoRequests,
    /// A request is pending supervisor or HR action.
    HasPending,
    /// The latest request is authorized with both approvals in.
    LastFullyAuthorized,
    /// The latest request reached a settled status without full approval.
    LastNotFullyAuthorized,
}

/// Classifies an employee's request history for eligibility gating.
///
/// Requests carry creation-ordered ids, so the record with the largest id
/// is the most recent.
#[must_use]
pub fn classify_request_history(requests: &[LeaveRequest]) -> EligibilityState {
    let mut latest: Option<&LeaveRequest> = None;
    let mut has_pending: bool = false;

    for request in requests.iter().filter(|request| request.is_active()) {
        if request.status == RequestStatus::Pending {
            has_pending = true;
        }
        if latest.is_none_or(|current| request.id > current.id) {
            latest = Some(request);
        }
    }

    if has_pending {
        return EligibilityState::HasPending;
    }
    match latest {
        None => EligibilityState::NoRequests,
        Some(request) if request.fully_authorized() => EligibilityState::LastFullyAuthorized,
        Some(_) => EligibilityState::LastNotFullyAuthorized,
    }
}

/// The outcome of a validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDecision {
    /// Whether the operation may proceed.
    pub allowed: bool,
    /// The human-readable denial reason, when not allowed.
    pub reason: Option<String>,
    /// The available balance backing the decision, when computed.
    pub available_days: Option<HalfDays>,
}

impl RequestDecision {
    fn allow(available_days: HalfDays) -> Self {
        Self {
            allowed: true,
            reason: None,
            available_days: Some(available_days),
        }
    }

    fn deny(reason: String) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            available_days: None,
        }
    }
}

/// Validates request creation and approval against the ledger.
pub struct RequestValidator<'a> {
    engine: &'a LedgerEngine<'a>,
    requests: &'a dyn RequestStore,
}

impl<'a> RequestValidator<'a> {
    /// Creates a validator over an engine and the request store.
    pub const fn new(engine: &'a LedgerEngine<'a>, requests: &'a dyn RequestStore) -> Self {
        Self { engine, requests }
    }

    /// Decides whether a new request may be created for an employee.
    ///
    /// Rejection order mirrors the cheapest checks first: a pending request,
    /// then an unsettled previous request, then the ledger balance. When a
    /// target management period is supplied and the configuration requires
    /// it, older periods with unused surplus block requests against newer
    /// periods.
    ///
    /// # Errors
    ///
    /// Returns ledger or store errors; a denial is a successful decision,
    /// not an error.
    pub fn can_create_request(
        &self,
        employee_id: EmployeeId,
        cutoff: Date,
        target_period: Option<(Date, Date)>,
    ) -> Result<RequestDecision, CoreError> {
        let history: Vec<LeaveRequest> = self.requests.requests_for_employee(employee_id)?;

        match classify_request_history(&history) {
            EligibilityState::HasPending => {
                return Ok(RequestDecision::deny(String::from(
                    "a pending request already exists",
                )));
            }
            EligibilityState::LastNotFullyAuthorized => {
                return Ok(RequestDecision::deny(String::from(
                    "the previous request has not been fully authorized",
                )));
            }
            EligibilityState::NoRequests | EligibilityState::LastFullyAuthorized => {}
        }

        let ledger: DebtLedger = self.engine.compute(employee_id, cutoff)?;
        let Some(last) = ledger.last_entry() else {
            return Ok(RequestDecision::deny(String::from(
                "no management period has matured yet",
            )));
        };

        if !last.available_days.is_positive() {
            return Ok(RequestDecision::deny(format!(
                "no available days (balance is {})",
                last.available_days
            )));
        }

        if self.engine.config().require_prior_exhausted
            && let Some((target_start, _)) = target_period
        {
            let unused: Option<&DebtLedgerEntry> = ledger.entries.iter().find(|entry| {
                entry.end_date <= target_start && entry.available_days.is_positive()
            });
            if let Some(entry) = unused {
                return Ok(RequestDecision::deny(format!(
                    "the management period starting {} still has {} unused days",
                    entry.start_date, entry.available_days
                )));
            }
        }

        Ok(RequestDecision::allow(last.available_days))
    }

    /// Decides whether a request may be approved for `requested_days`.
    ///
    /// The ledger entry is matched by the request's stored management-period
    /// end date. A shortfall denial names the missing amount.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RequestPeriodNotFound` when no ledger entry
    /// matches the request's period, plus ledger or store errors.
    pub fn can_approve_request(
        &self,
        request: &LeaveRequest,
        requested_days: HalfDays,
        cutoff: Date,
    ) -> Result<RequestDecision, CoreError> {
        let ledger: DebtLedger = self.engine.compute(request.employee_id, cutoff)?;

        let entry: &DebtLedgerEntry = ledger
            .entries
            .iter()
            .find(|entry| entry.end_date == request.period_end)
            .ok_or(CoreError::RequestPeriodNotFound {
                request: request.id,
                period_end: request.period_end,
            })?;

        if requested_days > entry.available_days {
            let shortfall: HalfDays = requested_days - entry.available_days;
            return Ok(RequestDecision::deny(format!(
                "requested {requested_days} days but only {} are available in the period ending {}: short {shortfall} days",
                entry.available_days, entry.end_date
            )));
        }

        Ok(RequestDecision::allow(entry.available_days))
    }
}
