//! Check digit calculation and verification workflow
//!
//! This module resolves a check digit system for an alphabet, routes values to the
//! weighted-sum or running-position calculator, and verifies supplied check
//! characters by recomputing them.
//!
//! Errors follow two classes: a bad alphabet is returned as `Err`, while bad
//! input (empty value, symbol outside the alphabet) yields `None` / `false`.

use crate::domain::charset::CharacterSet;
use crate::domain::error::CheckDigitError;
use crate::domain::hybrid::calculate_hybrid;
use crate::domain::modulus::{RadixModulus, SystemKind, check_digit_count, resolve};
use crate::domain::pure::calculate_pure;
use tracing::{debug, trace};

/// A resolved ISO 7064 system bound to its alphabet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckDigitSystem<'a> {
    charset: &'a CharacterSet,
    params: RadixModulus,
    double_digit: bool,
}

/// Result of checking a value against its trailing check character(s)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Check character(s) match
    Valid,
    /// Check character(s) differ from the recomputed ones
    Mismatch { expected: String },
    /// Value is not longer than the number of check characters
    TooShort,
    /// Base value cannot be checked
    Rejected(CheckDigitError),
}

impl VerifyOutcome {
    /// Whether the value verified
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl<'a> CheckDigitSystem<'a> {
    /// Resolve the system for `charset` in the given mode
    ///
    /// Fails with `InvalidCharacterSet` when the alphabet size has no ISO 7064
    /// radix.
    pub fn resolve(charset: &'a CharacterSet, double_digit: bool) -> Result<Self, CheckDigitError> {
        let params = resolve(charset.len(), double_digit)?;
        debug!(
            system = %params,
            kind = ?params.system(),
            size = charset.len(),
            double_digit,
            "resolved check digit system"
        );

        Ok(Self {
            charset,
            params,
            double_digit,
        })
    }

    /// Alphabet of the system
    pub fn charset(&self) -> &'a CharacterSet {
        self.charset
    }

    /// Resolved radix and modulus
    pub fn params(&self) -> RadixModulus {
        self.params
    }

    /// Calculator used by this system
    pub fn kind(&self) -> SystemKind {
        self.params.system()
    }

    /// Number of trailing check characters
    pub fn check_digit_count(&self) -> usize {
        check_digit_count(self.double_digit)
    }

    /// Append check character(s), reporting every failure as a typed error
    pub fn try_calculate(&self, value: &str) -> Result<String, CheckDigitError> {
        match self.kind() {
            SystemKind::Pure => calculate_pure(value, self.params, self.charset, self.double_digit),
            SystemKind::Hybrid => calculate_hybrid(value, self.charset),
        }
    }

    /// Append check character(s)
    ///
    /// Returns `Ok(None)` for an empty value or a symbol outside the alphabet.
    pub fn calculate(&self, value: &str) -> Result<Option<String>, CheckDigitError> {
        match self.try_calculate(value) {
            Ok(checked) => Ok(Some(checked)),
            Err(e) if e.is_input_error() => {
                trace!(error = %e, "input rejected");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Check a value that already carries its check character(s)
    pub fn check(&self, value: &str) -> Result<VerifyOutcome, CheckDigitError> {
        let num_digits = self.check_digit_count();
        if value.chars().count() <= num_digits {
            return Ok(VerifyOutcome::TooShort);
        }

        let candidate = value.to_uppercase();
        let base_len = candidate.chars().count().saturating_sub(num_digits);
        let split = candidate
            .char_indices()
            .nth(base_len)
            .map(|(i, _)| i)
            .unwrap_or(candidate.len());
        let base = &candidate[..split];

        match self.try_calculate(base) {
            Ok(expected) if expected == candidate => Ok(VerifyOutcome::Valid),
            Ok(expected) => Ok(VerifyOutcome::Mismatch { expected }),
            Err(e) if e.is_input_error() => {
                trace!(error = %e, "input rejected");
                Ok(VerifyOutcome::Rejected(e))
            }
            Err(e) => Err(e),
        }
    }

    /// Verify a value that already carries its check character(s)
    pub fn verify(&self, value: &str) -> Result<bool, CheckDigitError> {
        Ok(self.check(value)?.is_valid())
    }
}

// =============================================================================
// Generic entry points
// =============================================================================

/// Calculate the check character(s) of `value` over `charset`
///
/// # Returns
/// * `Ok(Some(checked))` - uppercased value followed by its check character(s)
/// * `Ok(None)` - value is empty or contains a symbol outside the alphabet
/// * `Err(_)` - the alphabet does not form an ISO 7064 system
pub fn calculate_check_digit(
    value: &str,
    charset: &CharacterSet,
    double_digit: bool,
) -> Result<Option<String>, CheckDigitError> {
    CheckDigitSystem::resolve(charset, double_digit)?.calculate(value)
}

/// Verify the trailing check character(s) of `value` over `charset`
///
/// Returns `Ok(false)` when the value is too short, has a bad symbol or carries the
/// wrong check character(s); `Err(_)` only for an unusable alphabet.
pub fn verify_check_digit(
    value: &str,
    charset: &CharacterSet,
    double_digit: bool,
) -> Result<bool, CheckDigitError> {
    CheckDigitSystem::resolve(charset, double_digit)?.verify(value)
}

// =============================================================================
// Fixed-alphabet wrappers
//
// The built-in alphabets always resolve, so these collapse the error channel.
// =============================================================================

fn calculate_builtin(value: &str, charset: &CharacterSet, double_digit: bool) -> Option<String> {
    calculate_check_digit(value, charset, double_digit)
        .ok()
        .flatten()
}

fn verify_builtin(value: &str, charset: &CharacterSet, double_digit: bool) -> bool {
    verify_check_digit(value, charset, double_digit).unwrap_or(false)
}

/// Calculates ISO 7064 MOD 11,10 (single digit) or MOD 97,10 (double digit)
pub fn calculate_numeric_check_digit(value: &str, double_digit: bool) -> Option<String> {
    calculate_builtin(value, CharacterSet::numeric(), double_digit)
}

/// Verifies ISO 7064 MOD 11,10 (single digit) or MOD 97,10 (double digit)
pub fn verify_numeric_check_digit(value: &str, double_digit: bool) -> bool {
    verify_builtin(value, CharacterSet::numeric(), double_digit)
}

/// Calculates MOD 17,16 (single digit) or MOD 251,16 (double digit)
pub fn calculate_hex_check_digit(value: &str, double_digit: bool) -> Option<String> {
    calculate_builtin(value, CharacterSet::hex(), double_digit)
}

/// Verifies MOD 17,16 (single digit) or MOD 251,16 (double digit)
pub fn verify_hex_check_digit(value: &str, double_digit: bool) -> bool {
    verify_builtin(value, CharacterSet::hex(), double_digit)
}

/// Calculates ISO 7064 MOD 27,26 (single digit) or MOD 661,26 (double digit)
pub fn calculate_alpha_check_digit(value: &str, double_digit: bool) -> Option<String> {
    calculate_builtin(value, CharacterSet::alpha(), double_digit)
}

/// Verifies ISO 7064 MOD 27,26 (single digit) or MOD 661,26 (double digit)
pub fn verify_alpha_check_digit(value: &str, double_digit: bool) -> bool {
    verify_builtin(value, CharacterSet::alpha(), double_digit)
}

/// Calculates ISO 7064 MOD 37,36 (single digit) or MOD 1271,36 (double digit)
pub fn calculate_alphanumeric_check_digit(value: &str, double_digit: bool) -> Option<String> {
    calculate_builtin(value, CharacterSet::alphanumeric(), double_digit)
}

/// Verifies ISO 7064 MOD 37,36 (single digit) or MOD 1271,36 (double digit)
pub fn verify_alphanumeric_check_digit(value: &str, double_digit: bool) -> bool {
    verify_builtin(value, CharacterSet::alphanumeric(), double_digit)
}

/// Calculates ISO 7064 MOD 11,2 (check character 0-9 or X)
pub fn calculate_mod11_2_check_digit(value: &str) -> Option<String> {
    calculate_builtin(value, CharacterSet::mod_11_2(), false)
}

/// Verifies ISO 7064 MOD 11,2
pub fn verify_mod11_2_check_digit(value: &str) -> bool {
    verify_builtin(value, CharacterSet::mod_11_2(), false)
}

/// Calculates ISO 7064 MOD 37,2 (check character 0-9, A-Z or *)
pub fn calculate_mod37_2_check_digit(value: &str) -> Option<String> {
    calculate_builtin(value, CharacterSet::mod_37_2(), false)
}

/// Verifies ISO 7064 MOD 37,2
pub fn verify_mod37_2_check_digit(value: &str) -> bool {
    verify_builtin(value, CharacterSet::mod_37_2(), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charset::BuiltinAlphabet;

    #[test]
    fn test_builtin_alphabets_resolve() {
        for alphabet in [
            BuiltinAlphabet::Numeric,
            BuiltinAlphabet::Hex,
            BuiltinAlphabet::Alpha,
            BuiltinAlphabet::Alphanumeric,
        ] {
            for double_digit in [false, true] {
                assert!(CheckDigitSystem::resolve(alphabet.charset(), double_digit).is_ok());
            }
        }
        assert!(CheckDigitSystem::resolve(CharacterSet::mod_11_2(), false).is_ok());
        assert!(CheckDigitSystem::resolve(CharacterSet::mod_37_2(), false).is_ok());
    }

    #[test]
    fn test_dispatch_kind() {
        let numeric = CharacterSet::numeric();
        assert_eq!(
            CheckDigitSystem::resolve(numeric, false).unwrap().kind(),
            SystemKind::Hybrid
        );
        assert_eq!(
            CheckDigitSystem::resolve(numeric, true).unwrap().kind(),
            SystemKind::Pure
        );
        assert_eq!(
            CheckDigitSystem::resolve(CharacterSet::mod_11_2(), false)
                .unwrap()
                .kind(),
            SystemKind::Pure
        );
    }

    #[test]
    fn test_calculate_numeric() {
        assert_eq!(
            calculate_numeric_check_digit("036532", false),
            Some("0365323".to_string())
        );
        assert_eq!(
            calculate_numeric_check_digit("0794", false),
            Some("07945".to_string())
        );
        assert_eq!(
            calculate_numeric_check_digit("0794", true),
            Some("079444".to_string())
        );
    }

    #[test]
    fn test_calculate_empty_is_absent() {
        for double_digit in [false, true] {
            assert_eq!(calculate_numeric_check_digit("", double_digit), None);
            assert_eq!(calculate_alpha_check_digit("", double_digit), None);
        }
        assert_eq!(calculate_mod11_2_check_digit(""), None);
    }

    #[test]
    fn test_calculate_invalid_character_is_absent() {
        assert_eq!(calculate_numeric_check_digit("12a4", false), None);
        assert_eq!(calculate_hex_check_digit("12G4", true), None);
        assert_eq!(calculate_alpha_check_digit("AB1", false), None);
        assert_eq!(calculate_alphanumeric_check_digit("A-1", true), None);
    }

    #[test]
    fn test_invalid_character_set_is_error() {
        let charset = CharacterSet::new("01234").unwrap();
        assert_eq!(
            calculate_check_digit("0123", &charset, false),
            Err(CheckDigitError::InvalidCharacterSet { size: 5 })
        );
        assert_eq!(
            verify_check_digit("01234", &charset, true),
            Err(CheckDigitError::InvalidCharacterSet { size: 5 })
        );
    }

    #[test]
    fn test_verify_numeric() {
        assert!(verify_numeric_check_digit("0365323", false));
        assert!(!verify_numeric_check_digit("0365324", false));
        assert!(verify_numeric_check_digit("079444", true));
        assert!(!verify_numeric_check_digit("079445", true));
    }

    #[test]
    fn test_verify_is_case_insensitive() {
        assert!(verify_alphanumeric_check_digit("iso793w", true));
        assert!(verify_alpha_check_digit("abcdr", false));
    }

    #[test]
    fn test_verify_too_short() {
        assert!(!verify_numeric_check_digit("", false));
        assert!(!verify_numeric_check_digit("5", false));
        assert!(!verify_numeric_check_digit("44", true));

        let system = CheckDigitSystem::resolve(CharacterSet::numeric(), true).unwrap();
        assert_eq!(system.check("44"), Ok(VerifyOutcome::TooShort));
    }

    #[test]
    fn test_check_reports_expected_on_mismatch() {
        let system = CheckDigitSystem::resolve(CharacterSet::numeric(), false).unwrap();
        assert_eq!(
            system.check("0365324"),
            Ok(VerifyOutcome::Mismatch {
                expected: "0365323".to_string()
            })
        );
    }

    #[test]
    fn test_check_reports_rejected_input() {
        let system = CheckDigitSystem::resolve(CharacterSet::hex(), false).unwrap();
        assert_eq!(
            system.check("AZ12"),
            Ok(VerifyOutcome::Rejected(CheckDigitError::InvalidCharacter {
                symbol: 'Z',
                position: 1
            }))
        );
    }

    #[test]
    fn test_mod_11_2_and_mod_37_2_wrappers() {
        assert_eq!(calculate_mod11_2_check_digit("079"), Some("079X".to_string()));
        assert!(verify_mod11_2_check_digit("079x"));
        assert_eq!(
            calculate_mod37_2_check_digit("G123498654321"),
            Some("G123498654321H".to_string())
        );
        assert!(verify_mod37_2_check_digit("G123498654321H"));
        assert!(!verify_mod37_2_check_digit("G123498654321*"));
    }

    #[test]
    fn test_binary_alphabet_double_digit_never_verifies() {
        // Size 2 keeps modulus 3 in double-digit mode, so only one check
        // character is produced while two are expected
        let charset = CharacterSet::new("01").unwrap();
        let checked = calculate_check_digit("0110", &charset, true)
            .unwrap()
            .unwrap();
        assert_eq!(checked.len(), 5);
        assert_eq!(verify_check_digit(&checked, &charset, true), Ok(false));
        assert_eq!(verify_check_digit(&checked, &charset, false), Ok(true));
    }
}
