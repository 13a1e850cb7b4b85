//! Check digit error definitions

use thiserror::Error;

/// Check digit errors
///
/// `InvalidCharacterSet` and `DuplicateSymbol` describe a bad alphabet and are
/// reported as errors by every public entry point. The remaining variants describe
/// bad input and surface as an absent result (`None` / `false`) from the
/// convenience APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// Value is empty
    #[error("Empty input: no characters to check")]
    EmptyInput,
    /// Character not present in the active alphabet (after uppercasing)
    ///
    /// `position` is a char index into the uppercased value. It differs from the
    /// caller's index once a character expands when uppercased (`ß` → `SS`).
    #[error("Invalid character '{symbol}' at position {position}")]
    InvalidCharacter { symbol: char, position: usize },
    /// Alphabet size does not resolve to a supported radix
    #[error("Invalid character set: size {size} has no supported ISO 7064 radix")]
    InvalidCharacterSet { size: usize },
    /// Computed check position has no character in the alphabet
    #[error("Check digit position {position} cannot be encoded by the character set")]
    UnencodableCheckDigit { position: usize },
    /// Alphabet contains the same character twice
    #[error("Duplicate symbol '{symbol}' in character set")]
    DuplicateSymbol { symbol: char },
}

impl CheckDigitError {
    /// Whether this error comes from the value rather than the alphabet
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InvalidCharacter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        assert!(CheckDigitError::EmptyInput.is_input_error());
        assert!(
            CheckDigitError::InvalidCharacter {
                symbol: '?',
                position: 0
            }
            .is_input_error()
        );
        assert!(!CheckDigitError::InvalidCharacterSet { size: 5 }.is_input_error());
        assert!(!CheckDigitError::UnencodableCheckDigit { position: 40 }.is_input_error());
        assert!(!CheckDigitError::DuplicateSymbol { symbol: 'A' }.is_input_error());
    }

    #[test]
    fn test_display_messages() {
        let err = CheckDigitError::InvalidCharacter {
            symbol: 'Q',
            position: 3,
        };
        assert_eq!(err.to_string(), "Invalid character 'Q' at position 3");

        let err = CheckDigitError::InvalidCharacterSet { size: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid character set: size 5 has no supported ISO 7064 radix"
        );
    }
}
