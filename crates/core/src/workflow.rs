// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request submission and approval workflow.
//!
//! The validator decides; this module acts. Each operation validates and
//! saves within a single call so the store's mutual-exclusion boundary
//! covers the whole read-decide-write sequence, closing the window where
//! two concurrent approvals could both pass the same balance check.

use crate::config::LedgerConfig;
use crate::error::CoreError;
use crate::ledger::{DebtLedgerEntry, LedgerEngine};
use crate::stores::{EmployeeLookup, HolidayStore, NotificationSink, PolicyStore, RequestStore};
use crate::validator::{RequestDecision, RequestValidator};
use leave_ledger_domain::{EmployeeId, HalfDays, LeaveRequest, RequestKind, RequestStatus};
use time::Date;

/// Which approver is acting on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproverRole {
    /// The employee's supervisor.
    Supervisor,
    /// Human resources.
    Hr,
}

impl ApproverRole {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supervisor => "supervisor",
            Self::Hr => "HR",
        }
    }
}

/// The caller-supplied fields of a new request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    /// The identifier assigned to the new request.
    pub id: i64,
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// Vacation or license.
    pub kind: RequestKind,
    /// First day requested (inclusive).
    pub start_date: Date,
    /// Last day requested (inclusive).
    pub end_date: Date,
    /// Total days requested, in half-day precision.
    pub total_days: HalfDays,
    /// The supervisor to notify of the submission.
    pub supervisor: EmployeeId,
}

/// Orchestrates validation, persistence, and notification for requests.
pub struct RequestWorkflow<'a> {
    employees: &'a dyn EmployeeLookup,
    holidays: &'a dyn HolidayStore,
    policies: &'a dyn PolicyStore,
    notifications: &'a dyn NotificationSink,
    config: LedgerConfig,
}

impl<'a> RequestWorkflow<'a> {
    /// Creates a workflow over the given collaborators.
    pub const fn new(
        employees: &'a dyn EmployeeLookup,
        holidays: &'a dyn HolidayStore,
        policies: &'a dyn PolicyStore,
        notifications: &'a dyn NotificationSink,
        config: LedgerConfig,
    ) -> Self {
        Self {
            employees,
            holidays,
            policies,
            notifications,
            config,
        }
    }

    /// Submits a new request: validates eligibility, rejects date ranges
    /// colliding with an existing live request, stamps the management period
    /// being drawn on, saves the record as `Pending`, and notifies the
    /// supervisor.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RequestDenied` when the validator rejects the
    /// submission, plus domain, ledger, or store errors.
    pub fn submit_request(
        &self,
        requests: &mut dyn RequestStore,
        draft: RequestDraft,
        cutoff: Date,
    ) -> Result<LeaveRequest, CoreError> {
        let (period_start, period_end): (Date, Date) = {
            let shared: &dyn RequestStore = &*requests;
            let engine: LedgerEngine<'_> = LedgerEngine::new(
                self.employees,
                self.holidays,
                self.policies,
                shared,
                self.config,
            );
            let validator: RequestValidator<'_> = RequestValidator::new(&engine, shared);

            let decision: RequestDecision =
                validator.can_create_request(draft.employee_id, cutoff, None)?;
            if !decision.allowed {
                return Err(CoreError::RequestDenied {
                    reason: decision.reason.unwrap_or_default(),
                });
            }

            let overlapping: Vec<LeaveRequest> =
                shared.requests_overlapping(draft.employee_id, draft.start_date, draft.end_date)?;
            if let Some(conflict) = overlapping
                .iter()
                .find(|existing| existing.is_active() && existing.status != RequestStatus::Denied)
            {
                return Err(CoreError::RequestDenied {
                    reason: format!(
                        "the requested dates overlap request {} ({} to {})",
                        conflict.id, conflict.start_date, conflict.end_date
                    ),
                });
            }

            // The new request draws on the latest matured period, whose
            // balance already folds in any carried surplus.
            let ledger = engine.compute(draft.employee_id, cutoff)?;
            let last: &DebtLedgerEntry =
                ledger
                    .last_entry()
                    .ok_or_else(|| CoreError::RequestDenied {
                        reason: String::from("no management period has matured yet"),
                    })?;
            (last.start_date, last.end_date)
        };

        let request: LeaveRequest = LeaveRequest::new(
            draft.id,
            draft.employee_id,
            draft.kind,
            draft.start_date,
            draft.end_date,
            draft.total_days,
            period_start,
            period_end,
        )?;

        requests.save_request(&request)?;

        self.notify_quietly(
            draft.supervisor,
            &format!(
                "Leave request {} from employee {} awaits your review ({} days)",
                request.id, request.employee_id, request.total_days
            ),
        );

        Ok(request)
    }

    /// Records an approver's decision on a pending request.
    ///
    /// Only a `Pending` request can be acted on: a request that already
    /// reached `Authorized`, `Denied`, `Postponed`, or `Suspended` is
    /// settled and rejects further approver action. An approval is
    /// validated against the ledger balance first; the request transitions
    /// to `Authorized` once both approvers have approved. A rejection
    /// transitions the request to `Denied` immediately. The employee is
    /// notified either way.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RequestDenied` when the request is no longer
    /// pending or the balance check fails, `CoreError::Store` when the
    /// request cannot be loaded or saved, and ledger errors as they arise.
    pub fn record_approval(
        &self,
        requests: &mut dyn RequestStore,
        request_id: i64,
        approver: ApproverRole,
        approved: bool,
        cutoff: Date,
    ) -> Result<LeaveRequest, CoreError> {
        let mut request: LeaveRequest = requests.find_request(request_id)?;

        if request.status != RequestStatus::Pending {
            return Err(CoreError::RequestDenied {
                reason: format!(
                    "request {} is already {} and cannot be acted on",
                    request.id, request.status
                ),
            });
        }

        if approved {
            let shared: &dyn RequestStore = &*requests;
            let engine: LedgerEngine<'_> = LedgerEngine::new(
                self.employees,
                self.holidays,
                self.policies,
                shared,
                self.config,
            );
            let validator: RequestValidator<'_> = RequestValidator::new(&engine, shared);

            let decision: RequestDecision =
                validator.can_approve_request(&request, request.total_days, cutoff)?;
            if !decision.allowed {
                return Err(CoreError::RequestDenied {
                    reason: decision.reason.unwrap_or_default(),
                });
            }
        }

        match approver {
            ApproverRole::Supervisor => request.approvals.supervisor = Some(approved),
            ApproverRole::Hr => request.approvals.hr = Some(approved),
        }

        if approved {
            if request.approvals.fully_approved() {
                request.status = RequestStatus::Authorized;
            }
        } else {
            request.status = RequestStatus::Denied;
        }

        requests.save_request(&request)?;

        let message: String = if approved {
            if request.status == RequestStatus::Authorized {
                format!("Your leave request {} is fully authorized", request.id)
            } else {
                format!(
                    "Your leave request {} was approved by {}",
                    request.id,
                    approver.as_str()
                )
            }
        } else {
            format!(
                "Your leave request {} was denied by {}",
                request.id,
                approver.as_str()
            )
        };
        self.notify_quietly(request.employee_id, &message);

        Ok(request)
    }

    /// Sends a notification, logging and swallowing any delivery failure.
    fn notify_quietly(&self, recipient: EmployeeId, message: &str) {
        if let Err(err) = self.notifications.notify(recipient, message) {
            tracing::warn!(
                recipient = %recipient,
                error = %err,
                "notification delivery failed"
            );
        }
    }
}
