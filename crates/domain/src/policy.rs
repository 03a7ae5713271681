// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seniority policy tiers and entitlement resolution.
//!
//! A policy table is an ordered set of tiers, non-overlapping and gapless
//! over `[0, inf)`: for every non-negative whole-year tenure exactly one
//! tier matches. The table is validated once at construction so resolution
//! can treat a missing tier as an internal-consistency failure.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single seniority tier granting vacation days per management period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityPolicy {
    /// Minimum whole years of service for this tier (inclusive).
    pub min_years: u16,
    /// Maximum whole years of service for this tier (inclusive).
    /// `None` means the tier is unbounded.
    pub max_years: Option<u16>,
    /// Vacation days granted per management period at this tier.
    pub vacation_days: u16,
}

impl SeniorityPolicy {
    /// Creates a new `SeniorityPolicy`.
    #[must_use]
    pub const fn new(min_years: u16, max_years: Option<u16>, vacation_days: u16) -> Self {
        Self {
            min_years,
            max_years,
            vacation_days,
        }
    }

    /// Returns whether this tier matches the given years of service.
    #[must_use]
    pub const fn matches(&self, years_of_service: u16) -> bool {
        if years_of_service < self.min_years {
            return false;
        }
        match self.max_years {
            Some(max) => years_of_service <= max,
            None => true,
        }
    }
}

/// A validated, ordered set of seniority tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    tiers: Vec<SeniorityPolicy>,
}

impl PolicyTable {
    /// Builds a policy table, validating the tier-set invariant.
    ///
    /// Tiers are sorted by `min_years`. The set must start at 0 years, each
    /// tier must begin exactly one year after the previous tier ends, and
    /// the final tier must be unbounded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PolicyTableInvalid` when the tiers are empty,
    /// overlapping, gapped, internally inverted, or bounded at the top.
    pub fn new(mut tiers: Vec<SeniorityPolicy>) -> Result<Self, DomainError> {
        if tiers.is_empty() {
            return Err(DomainError::PolicyTableInvalid {
                reason: String::from("at least one tier is required"),
            });
        }

        tiers.sort_by_key(|tier| tier.min_years);

        if tiers[0].min_years != 0 {
            return Err(DomainError::PolicyTableInvalid {
                reason: format!(
                    "first tier must start at 0 years, starts at {}",
                    tiers[0].min_years
                ),
            });
        }

        for tier in &tiers {
            if let Some(max) = tier.max_years
                && max < tier.min_years
            {
                return Err(DomainError::PolicyTableInvalid {
                    reason: format!(
                        "tier [{}, {max}] has its upper bound below its lower bound",
                        tier.min_years
                    ),
                });
            }
        }

        for pair in tiers.windows(2) {
            let Some(max) = pair[0].max_years else {
                return Err(DomainError::PolicyTableInvalid {
                    reason: format!(
                        "unbounded tier starting at {} years is not the last tier",
                        pair[0].min_years
                    ),
                });
            };
            if pair[1].min_years != max + 1 {
                return Err(DomainError::PolicyTableInvalid {
                    reason: format!(
                        "tier starting at {} years does not follow directly after the tier ending at {max} years",
                        pair[1].min_years
                    ),
                });
            }
        }

        if let Some(last) = tiers.last()
            && last.max_years.is_some()
        {
            return Err(DomainError::PolicyTableInvalid {
                reason: String::from("last tier must be unbounded"),
            });
        }

        Ok(Self { tiers })
    }

    /// Resolves the entitlement tier for the given whole years of service.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PolicyNotFound` if no tier matches. Under the
    /// construction invariant this cannot happen; callers treat it as an
    /// internal-consistency failure, not a user error.
    pub fn resolve(&self, years_of_service: u16) -> Result<&SeniorityPolicy, DomainError> {
        self.tiers
            .iter()
            .find(|tier| tier.matches(years_of_service))
            .ok_or(DomainError::PolicyNotFound { years_of_service })
    }

    /// Returns the validated tiers in ascending order.
    #[must_use]
    pub fn tiers(&self) -> &[SeniorityPolicy] {
        &self.tiers
    }
}
