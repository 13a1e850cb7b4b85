//! Weighted-sum check digit calculator
//!
//! Used whenever the resolved modulus differs from radix + 1: MOD 11,2 and
//! MOD 37,2 in single-digit mode, and every large-modulus double-digit system
//! (MOD 97,10 / MOD 251,16 / MOD 661,26 / MOD 1271,36).

use crate::domain::charset::CharacterSet;
use crate::domain::error::CheckDigitError;
use crate::domain::modulus::RadixModulus;

/// Append the check character(s) of a weighted-sum system to `value`
///
/// The value is uppercased, then every symbol value `i` is folded into the
/// accumulator as `p = ((p + i) * radix) % modulus`. Double-digit mode applies one
/// extra multiplication and splits the check position into two base-`radix`
/// symbols.
///
/// # Arguments
/// * `value` - Value to protect (any case)
/// * `params` - Resolved radix and modulus
/// * `charset` - Alphabet of both the value and the check character(s)
/// * `double_digit` - Append two check characters instead of one
///
/// # Returns
/// The uppercased value followed by its check character(s)
pub fn calculate_pure(
    value: &str,
    params: RadixModulus,
    charset: &CharacterSet,
    double_digit: bool,
) -> Result<String, CheckDigitError> {
    if value.is_empty() {
        return Err(CheckDigitError::EmptyInput);
    }

    let mut result = value.to_uppercase();
    let RadixModulus { radix, modulus } = params;

    let mut p: u32 = 0;
    for (position, symbol) in result.chars().enumerate() {
        let i = symbol_value(charset, symbol, position)?;
        p = ((p + i) * radix) % modulus;
    }

    if double_digit {
        p = (p * radix) % modulus;
    }

    let check = (modulus - p + 1) % modulus;

    if double_digit {
        let second = check % radix;
        let first = (check - second) / radix;
        result.push(encode(charset, first)?);
        result.push(encode(charset, second)?);
    } else {
        result.push(encode(charset, check)?);
    }

    Ok(result)
}

#[inline]
fn symbol_value(
    charset: &CharacterSet,
    symbol: char,
    position: usize,
) -> Result<u32, CheckDigitError> {
    charset
        .index_of(symbol)
        .map(|i| i as u32)
        .ok_or(CheckDigitError::InvalidCharacter { symbol, position })
}

#[inline]
fn encode(charset: &CharacterSet, position: u32) -> Result<char, CheckDigitError> {
    charset
        .symbol_at(position as usize)
        .ok_or(CheckDigitError::UnencodableCheckDigit {
            position: position as usize,
        })
}
