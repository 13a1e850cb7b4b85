//! iso7064-check - ISO 7064 check digit calculation and verification
//!
//! This crate provides functionality to:
//! - Calculate check characters over numeric, hexadecimal, alphabetic and
//!   alphanumeric alphabets, in single-digit and double-digit mode
//! - Verify values that carry their check character(s)
//! - Process many values in parallel against one resolved system

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::batch::{BatchSummary, calculate_batch, verify_batch};
pub use app::checker::{
    CheckDigitSystem, VerifyOutcome, calculate_alpha_check_digit,
    calculate_alphanumeric_check_digit, calculate_check_digit, calculate_hex_check_digit,
    calculate_mod11_2_check_digit, calculate_mod37_2_check_digit, calculate_numeric_check_digit,
    verify_alpha_check_digit, verify_alphanumeric_check_digit, verify_check_digit,
    verify_hex_check_digit, verify_mod11_2_check_digit, verify_mod37_2_check_digit,
    verify_numeric_check_digit,
};
pub use domain::charset::{BuiltinAlphabet, CharacterSet};
pub use domain::error::CheckDigitError;
pub use domain::modulus::{RadixModulus, SystemKind};
