// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Rule configuration passed explicitly into the engine and validator.
///
/// There is no ambient global configuration: callers supply a value per
/// invocation, which keeps ledger computations deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// When creating a request against a specific management period, reject
    /// it while an earlier period still carries a positive balance.
    pub require_prior_exhausted: bool,
    /// Whether `Suspended` requests still count their days as consumed.
    pub count_suspended: bool,
}

impl LedgerConfig {
    /// Creates a new `LedgerConfig`.
    #[must_use]
    pub const fn new(require_prior_exhausted: bool, count_suspended: bool) -> Self {
        Self {
            require_prior_exhausted,
            count_suspended,
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}
