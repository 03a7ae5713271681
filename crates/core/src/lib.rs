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

mod config;
mod consumption;
mod error;
mod ledger;
mod stores;
mod validator;
mod workflow;

#[cfg(test)]
mod tests;

pub use config::LedgerConfig;
pub use consumption::sum_authorized;
pub use error::CoreError;
pub use ledger::{DebtLedger, DebtLedgerEntry, DebtLedgerSummary, LedgerEngine};
pub use stores::{
    EmployeeLookup, HolidayStore, NotificationSink, PolicyStore, RequestStore, StoreError,
};
pub use validator::{EligibilityState, RequestDecision, RequestValidator, classify_request_history};
pub use workflow::{ApproverRole, RequestDraft, RequestWorkflow};
