//! Radix/modulus resolution
//!
//! Derives the (radix, modulus) pair of an ISO 7064 system from the alphabet size
//! and the digit-count mode, and decides which calculator applies.

use crate::constants::{
    DOUBLE_CHECK_DIGITS, DOUBLE_DIGIT_MODULI, RADIX_TWO, RADIX_TWO_MODULI, SINGLE_CHECK_DIGITS,
    SUPPORTED_RADICES,
};
use crate::domain::error::CheckDigitError;
use std::fmt;

/// Which recurrence computes the check character(s)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SystemKind {
    /// Weighted sum reduced by the modulus (modulus != radix + 1)
    Pure,
    /// Running position over the alphabet (modulus == radix + 1)
    Hybrid,
}

/// Arithmetic parameters of a check digit system
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RadixModulus {
    /// Multiplier of the weighted-sum recurrence
    pub radix: u32,
    /// Reduction modulus
    pub modulus: u32,
}

impl RadixModulus {
    /// Calculator selected by these parameters
    pub fn system(&self) -> SystemKind {
        if self.modulus != self.radix + 1 {
            SystemKind::Pure
        } else {
            SystemKind::Hybrid
        }
    }
}

impl fmt::Display for RadixModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MOD {},{}", self.modulus, self.radix)
    }
}

/// Resolve radix and modulus for an alphabet of `size` symbols
///
/// - double digit: modulus from [`DOUBLE_DIGIT_MODULI`], sizes not listed keep `size + 1`
/// - size 11 / 37 (single digit): radix 2 with modulus 11 / 37
/// - otherwise: radix `size`, modulus `size + 1`
///
/// Fails with `InvalidCharacterSet` unless the radix ends up in [`SUPPORTED_RADICES`].
pub fn resolve(size: usize, double_digit: bool) -> Result<RadixModulus, CheckDigitError> {
    let invalid = CheckDigitError::InvalidCharacterSet { size };
    let mut radix = u32::try_from(size).map_err(|_| invalid.clone())?;
    let mut modulus = radix.checked_add(1).ok_or_else(|| invalid.clone())?;

    if double_digit {
        if let Some(&(_, m)) = DOUBLE_DIGIT_MODULI.iter().find(|(s, _)| *s == size) {
            modulus = m;
        }
    } else if let Some(&(_, m)) = RADIX_TWO_MODULI.iter().find(|(s, _)| *s == size) {
        modulus = m;
        radix = RADIX_TWO;
    }

    if !SUPPORTED_RADICES.contains(&radix) {
        return Err(invalid);
    }

    Ok(RadixModulus { radix, modulus })
}

/// Number of check characters appended in the given mode
#[inline]
pub fn check_digit_count(double_digit: bool) -> usize {
    if double_digit {
        DOUBLE_CHECK_DIGITS
    } else {
        SINGLE_CHECK_DIGITS
    }
}
