//! ISO 7064 related constants
//!
//! Note: Radix/modulus resolution rules live in domain/modulus.rs; this module only
//! holds the tables they read.

// =============================================================================
// Character sets
// =============================================================================

/// Decimal digits (MOD 11,10 / MOD 97,10)
pub const NUMERIC: &str = "0123456789";

/// Decimal digits plus 'X' as the eleventh check character (MOD 11,2)
pub const MOD_112: &str = "0123456789X";

/// Hexadecimal digits (MOD 17,16 / MOD 251,16)
pub const HEX: &str = "0123456789ABCDEF";

/// Latin letters (MOD 27,26 / MOD 661,26)
pub const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits and Latin letters (MOD 37,36 / MOD 1271,36)
pub const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits, Latin letters and '*' as the thirty-seventh check character (MOD 37,2)
pub const MOD_372: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*";

// =============================================================================
// Radix / modulus parameters
// =============================================================================

/// Radices accepted after resolution
pub const SUPPORTED_RADICES: [u32; 5] = [2, 10, 16, 26, 36];

/// Double-digit modulus by alphabet size
///
/// MOD 251,16 is not part of ISO 7064 but follows the same construction.
pub const DOUBLE_DIGIT_MODULI: [(usize, u32); 4] = [(10, 97), (16, 251), (26, 661), (36, 1271)];

/// Alphabet sizes that select a radix-2 system, with their modulus
pub const RADIX_TWO_MODULI: [(usize, u32); 2] = [(11, 11), (37, 37)];

/// Radix used by the MOD 11,2 and MOD 37,2 systems
pub const RADIX_TWO: u32 = 2;

// =============================================================================
// Check character counts
// =============================================================================

/// Check characters appended in single-digit mode
pub const SINGLE_CHECK_DIGITS: usize = 1;

/// Check characters appended in double-digit mode
pub const DOUBLE_CHECK_DIGITS: usize = 2;
