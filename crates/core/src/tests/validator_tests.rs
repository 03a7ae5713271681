// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    InMemoryEmployees, InMemoryHolidays, InMemoryPolicies, InMemoryRequests, authorized_request,
    pending_request,
};
use crate::{
    CoreError, EligibilityState, LedgerConfig, LedgerEngine, RequestDecision, RequestValidator,
    classify_request_history,
};
use leave_ledger_domain::{
    EmployeeId, HalfDays, HolidayPeriod, HolidayScope, LeaveRequest, RequestStatus,
};
use time::macros::date;

#[test]
fn test_classify_empty_history() {
    assert_eq!(classify_request_history(&[]), EligibilityState::NoRequests);
}

#[test]
fn test_classify_pending_wins() {
    let requests: Vec<LeaveRequest> = vec![
        authorized_request(
            1,
            1,
            date!(2021 - 06 - 01),
            date!(2021 - 06 - 04),
            HalfDays::from_days(4),
            date!(2021 - 01 - 15),
            date!(2022 - 01 - 15),
        ),
        pending_request(
            2,
            1,
            date!(2022 - 06 - 01),
            date!(2022 - 06 - 03),
            HalfDays::from_days(3),
            date!(2022 - 01 - 15),
            date!(2023 - 01 - 15),
        ),
    ];

    assert_eq!(
        classify_request_history(&requests),
        EligibilityState::HasPending
    );
}

#[test]
fn test_classify_latest_by_id() {
    let mut early: LeaveRequest = authorized_request(
        1,
        1,
        date!(2021 - 06 - 01),
        date!(2021 - 06 - 04),
        HalfDays::from_days(4),
        date!(2021 - 01 - 15),
        date!(2022 - 01 - 15),
    );
    early.status = RequestStatus::Postponed;
    let late: LeaveRequest = authorized_request(
        2,
        1,
        date!(2022 - 06 - 01),
        date!(2022 - 06 - 03),
        HalfDays::from_days(3),
        date!(2022 - 01 - 15),
        date!(2023 - 01 - 15),
    );

    // The fully authorized record has the larger id, so it gates.
    assert_eq!(
        classify_request_history(&[early, late]),
        EligibilityState::LastFullyAuthorized
    );
}

#[test]
fn test_classify_ignores_deleted_requests() {
    let mut deleted: LeaveRequest = pending_request(
        1,
        1,
        date!(2021 - 06 - 01),
        date!(2021 - 06 - 04),
        HalfDays::from_days(4),
        date!(2021 - 01 - 15),
        date!(2022 - 01 - 15),
    );
    deleted.deleted = true;

    assert_eq!(
        classify_request_history(&[deleted]),
        EligibilityState::NoRequests
    );
}

#[test]
fn test_pending_request_blocks_creation() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2020 - 01 - 15));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(15);
    let requests: InMemoryRequests = InMemoryRequests::with(vec![pending_request(
        1,
        1,
        date!(2021 - 06 - 01),
        date!(2021 - 06 - 04),
        HalfDays::from_days(4),
        date!(2021 - 01 - 15),
        date!(2022 - 01 - 15),
    )]);
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(EmployeeId::new(1), date!(2024 - 06 - 01), None)
        .unwrap();

    assert!(!decision.allowed);
    assert!(decision.reason.unwrap().contains("pending"));
}

#[test]
fn test_unsettled_previous_request_blocks_creation() {
    // Authorized status but missing the HR approval flag.
    let mut half_approved: LeaveRequest = authorized_request(
        1,
        1,
        date!(2021 - 06 - 01),
        date!(2021 - 06 - 04),
        HalfDays::from_days(4),
        date!(2021 - 01 - 15),
        date!(2022 - 01 - 15),
    );
    half_approved.approvals.hr = None;

    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2020 - 01 - 15));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(15);
    let requests: InMemoryRequests = InMemoryRequests::with(vec![half_approved]);
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(EmployeeId::new(1), date!(2024 - 06 - 01), None)
        .unwrap();

    assert!(!decision.allowed);
    assert!(decision.reason.unwrap().contains("fully authorized"));
}

#[test]
fn test_fully_authorized_history_allows_creation() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2020 - 01 - 15));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(15);
    let requests: InMemoryRequests = InMemoryRequests::with(vec![authorized_request(
        1,
        1,
        date!(2020 - 06 - 01),
        date!(2020 - 06 - 05),
        HalfDays::from_days(5),
        date!(2020 - 01 - 15),
        date!(2021 - 01 - 15),
    )]);
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(EmployeeId::new(1), date!(2024 - 06 - 01), None)
        .unwrap();

    assert!(decision.allowed);
    // 4 periods * 15 days, minus the 5 consumed
    assert_eq!(decision.available_days, Some(HalfDays::from_days(55)));
}

#[test]
fn test_no_requests_allows_full_balance() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2020 - 01 - 15));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(15);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(EmployeeId::new(1), date!(2024 - 06 - 01), None)
        .unwrap();

    assert!(decision.allowed);
    assert_eq!(decision.available_days, Some(HalfDays::from_days(60)));
}

#[test]
fn test_exhausted_balance_blocks_creation() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2023 - 01 - 09));
    let mut holidays: InMemoryHolidays = InMemoryHolidays::empty();
    // Five business days of holiday cancel the five accrued days.
    holidays.periods.push(
        HolidayPeriod::new(
            "Winter recess",
            HolidayScope::General,
            2023,
            date!(2023 - 07 - 03),
            date!(2023 - 07 - 07),
        )
        .unwrap(),
    );
    let policies: InMemoryPolicies = InMemoryPolicies::flat(5);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(EmployeeId::new(1), date!(2024 - 06 - 01), None)
        .unwrap();

    assert!(!decision.allowed);
    assert!(decision.reason.unwrap().contains("no available days"));
}

#[test]
fn test_immature_tenure_blocks_creation() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2024 - 01 - 08));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(15);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(EmployeeId::new(1), date!(2024 - 06 - 01), None)
        .unwrap();

    assert!(!decision.allowed);
    assert!(decision.reason.unwrap().contains("matured"));
}

#[test]
fn test_older_surplus_blocks_targeting_newer_period() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2020 - 01 - 15));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(15);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(
            EmployeeId::new(1),
            date!(2022 - 06 - 01),
            Some((date!(2021 - 01 - 15), date!(2022 - 01 - 15))),
        )
        .unwrap();

    assert!(!decision.allowed);
    assert!(decision.reason.unwrap().contains("unused"));
}

#[test]
fn test_older_surplus_rule_disabled_by_config() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2020 - 01 - 15));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(15);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::new(false, true),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let decision: RequestDecision = validator
        .can_create_request(
            EmployeeId::new(1),
            date!(2022 - 06 - 01),
            Some((date!(2021 - 01 - 15), date!(2022 - 01 - 15))),
        )
        .unwrap();

    assert!(decision.allowed);
}

#[test]
fn test_approval_within_balance_allowed() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2022 - 01 - 10));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(7);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let request: LeaveRequest = pending_request(
        1,
        1,
        date!(2023 - 02 - 06),
        date!(2023 - 02 - 10),
        HalfDays::from_days(5),
        date!(2022 - 01 - 10),
        date!(2023 - 01 - 10),
    );

    let decision: RequestDecision = validator
        .can_approve_request(&request, HalfDays::from_days(5), date!(2023 - 06 - 01))
        .unwrap();

    assert!(decision.allowed);
    assert_eq!(decision.available_days, Some(HalfDays::from_days(7)));
}

#[test]
fn test_approval_shortfall_named_in_reason() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2022 - 01 - 10));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(7);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    let request: LeaveRequest = pending_request(
        1,
        1,
        date!(2023 - 02 - 06),
        date!(2023 - 02 - 17),
        HalfDays::from_days(10),
        date!(2022 - 01 - 10),
        date!(2023 - 01 - 10),
    );

    let decision: RequestDecision = validator
        .can_approve_request(&request, HalfDays::from_days(10), date!(2023 - 06 - 01))
        .unwrap();

    assert!(!decision.allowed);
    let reason: String = decision.reason.unwrap();
    assert!(reason.contains("short 3 days"));
}

#[test]
fn test_approval_with_unknown_period_fails() {
    let employees: InMemoryEmployees = InMemoryEmployees::single(1, date!(2022 - 01 - 10));
    let holidays: InMemoryHolidays = InMemoryHolidays::empty();
    let policies: InMemoryPolicies = InMemoryPolicies::flat(7);
    let requests: InMemoryRequests = InMemoryRequests::empty();
    let engine: LedgerEngine<'_> = LedgerEngine::new(
        &employees,
        &holidays,
        &policies,
        &requests,
        LedgerConfig::default(),
    );
    let validator: RequestValidator<'_> = RequestValidator::new(&engine, &requests);

    // Period end does not match any ledger entry.
    let request: LeaveRequest = pending_request(
        1,
        1,
        date!(2023 - 02 - 06),
        date!(2023 - 02 - 10),
        HalfDays::from_days(5),
        date!(2023 - 01 - 10),
        date!(2024 - 01 - 10),
    );

    let result: Result<RequestDecision, CoreError> =
        validator.can_approve_request(&request, HalfDays::from_days(5), date!(2023 - 06 - 01));

    assert!(matches!(
        result,
        Err(CoreError::RequestPeriodNotFound { request: 1, .. })
    ));
}
