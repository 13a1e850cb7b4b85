//! Batch workflow
//!
//! This module applies a resolved check digit system to many values at once.
//! Calculation is side-effect free, so values are processed in parallel with rayon;
//! results keep the input order.

use crate::app::checker::{CheckDigitSystem, VerifyOutcome};
use crate::domain::error::CheckDigitError;
use rayon::prelude::*;

/// Calculate check character(s) for every value in parallel
pub fn calculate_batch<S>(
    system: &CheckDigitSystem<'_>,
    values: &[S],
) -> Vec<Result<String, CheckDigitError>>
where
    S: AsRef<str> + Sync,
{
    values
        .par_iter()
        .map(|value| system.try_calculate(value.as_ref()))
        .collect()
}

/// Check every value in parallel
///
/// Errors that are not input errors are folded into `VerifyOutcome::Rejected`.
pub fn verify_batch<S>(system: &CheckDigitSystem<'_>, values: &[S]) -> Vec<VerifyOutcome>
where
    S: AsRef<str> + Sync,
{
    values
        .par_iter()
        .map(|value| {
            system
                .check(value.as_ref())
                .unwrap_or_else(VerifyOutcome::Rejected)
        })
        .collect()
}

/// Counts over a verified batch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of values checked
    pub total: usize,
    /// Values whose check character(s) matched
    pub valid: usize,
    /// Values with wrong check character(s)
    pub mismatched: usize,
    /// Values too short or containing symbols outside the alphabet
    pub rejected: usize,
}

impl BatchSummary {
    /// Summarize verification outcomes
    pub fn from_outcomes(outcomes: &[VerifyOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Self::default()
        };

        for outcome in outcomes {
            match outcome {
                VerifyOutcome::Valid => summary.valid += 1,
                VerifyOutcome::Mismatch { .. } => summary.mismatched += 1,
                VerifyOutcome::TooShort | VerifyOutcome::Rejected(_) => summary.rejected += 1,
            }
        }

        summary
    }

    /// Whether every value verified
    pub fn all_valid(&self) -> bool {
        self.valid == self.total
    }
}
