//! Running-position check character calculator
//!
//! Used when the resolved modulus equals radix + 1: MOD 11,10, MOD 17,16,
//! MOD 27,26 and MOD 37,36, always with a single check character.

use crate::domain::charset::CharacterSet;
use crate::domain::error::CheckDigitError;

/// Append the check character of a running-position system to `value`
///
/// The running position starts at the alphabet size `n`. For each symbol value
/// `i` it becomes `pos + i` (reduced by `n` when above `n`), then doubled
/// (reduced by `n + 1` when at least `n + 1`). The check value is `n + 1 - pos`,
/// with `n` wrapping to 0.
pub fn calculate_hybrid(value: &str, charset: &CharacterSet) -> Result<String, CheckDigitError> {
    if value.is_empty() {
        return Err(CheckDigitError::EmptyInput);
    }

    let mut result = value.to_uppercase();
    let size = charset.len();

    let mut pos = size;
    for (position, symbol) in result.chars().enumerate() {
        let i = charset
            .index_of(symbol)
            .ok_or(CheckDigitError::InvalidCharacter { symbol, position })?;

        pos += i;
        if pos > size {
            pos -= size;
        }

        pos *= 2;
        if pos >= size + 1 {
            pos -= size + 1;
        }
    }

    let mut check = size + 1 - pos;
    if check == size {
        check = 0;
    }

    let symbol = charset
        .symbol_at(check)
        .ok_or(CheckDigitError::UnencodableCheckDigit { position: check })?;
    result.push(symbol);

    Ok(result)
}
