//! Character set definitions
//!
//! A character set maps each of its symbols to a zero-based value and back.
//! The six ISO 7064 alphabets are provided as lazily built statics.

use crate::constants::{ALPHA, ALPHANUMERIC, HEX, MOD_112, MOD_372, NUMERIC};
use crate::domain::error::CheckDigitError;
use std::fmt;
use std::sync::LazyLock;

#[cfg(feature = "hashmap-lookup")]
use rustc_hash::FxHashMap;

/// Symbol → value index (O(1) lookup)
#[cfg(feature = "hashmap-lookup")]
type SymbolIndex = FxHashMap<char, usize>;

/// Symbol → value index, sorted by symbol (O(log n) lookup)
#[cfg(not(feature = "hashmap-lookup"))]
type SymbolIndex = Vec<(char, usize)>;

static NUMERIC_SET: LazyLock<CharacterSet> = LazyLock::new(|| CharacterSet::builtin(NUMERIC));
static MOD_112_SET: LazyLock<CharacterSet> = LazyLock::new(|| CharacterSet::builtin(MOD_112));
static HEX_SET: LazyLock<CharacterSet> = LazyLock::new(|| CharacterSet::builtin(HEX));
static ALPHA_SET: LazyLock<CharacterSet> = LazyLock::new(|| CharacterSet::builtin(ALPHA));
static ALPHANUMERIC_SET: LazyLock<CharacterSet> =
    LazyLock::new(|| CharacterSet::builtin(ALPHANUMERIC));
static MOD_372_SET: LazyLock<CharacterSet> = LazyLock::new(|| CharacterSet::builtin(MOD_372));

/// Ordered alphabet of unique symbols
#[derive(Clone, Debug)]
pub struct CharacterSet {
    symbols: String,
    chars: Vec<char>,
    index: SymbolIndex,
}

impl CharacterSet {
    /// Create a character set from the given symbols
    ///
    /// Fails if the alphabet is empty or contains a symbol twice. The alphabet size
    /// is not checked against ISO 7064 here; that happens when a check digit
    /// system is resolved.
    pub fn new(symbols: &str) -> Result<Self, CheckDigitError> {
        if symbols.is_empty() {
            return Err(CheckDigitError::InvalidCharacterSet { size: 0 });
        }

        let chars: Vec<char> = symbols.chars().collect();
        let (index, duplicate) = index_symbols(&chars);
        if let Some(symbol) = duplicate {
            return Err(CheckDigitError::DuplicateSymbol { symbol });
        }

        Ok(Self {
            symbols: symbols.to_string(),
            chars,
            index,
        })
    }

    /// Build one of the constant alphabets (known to be duplicate-free)
    fn builtin(symbols: &'static str) -> Self {
        let chars: Vec<char> = symbols.chars().collect();
        let (index, _) = index_symbols(&chars);
        Self {
            symbols: symbols.to_string(),
            chars,
            index,
        }
    }

    /// `0123456789`
    pub fn numeric() -> &'static Self {
        &NUMERIC_SET
    }

    /// `0123456789X`
    pub fn mod_11_2() -> &'static Self {
        &MOD_112_SET
    }

    /// `0123456789ABCDEF`
    pub fn hex() -> &'static Self {
        &HEX_SET
    }

    /// `A`-`Z`
    pub fn alpha() -> &'static Self {
        &ALPHA_SET
    }

    /// `0`-`9` then `A`-`Z`
    pub fn alphanumeric() -> &'static Self {
        &ALPHANUMERIC_SET
    }

    /// `0`-`9`, `A`-`Z` then `*`
    pub fn mod_37_2() -> &'static Self {
        &MOD_372_SET
    }

    /// Number of symbols
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Value of a symbol, if present
    #[cfg(feature = "hashmap-lookup")]
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Value of a symbol, if present
    #[cfg(not(feature = "hashmap-lookup"))]
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|i| self.index[i].1)
    }

    /// Symbol for a value, if in range
    #[inline]
    pub fn symbol_at(&self, value: usize) -> Option<char> {
        self.chars.get(value).copied()
    }

    /// Symbols in value order
    pub fn as_str(&self) -> &str {
        &self.symbols
    }
}

impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for CharacterSet {}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

/// Build the lookup index, reporting the first repeated symbol
#[cfg(feature = "hashmap-lookup")]
fn index_symbols(chars: &[char]) -> (SymbolIndex, Option<char>) {
    let mut index = SymbolIndex::default();
    index.reserve(chars.len());
    let mut duplicate = None;

    for (value, &symbol) in chars.iter().enumerate() {
        if index.insert(symbol, value).is_some() && duplicate.is_none() {
            duplicate = Some(symbol);
        }
    }

    (index, duplicate)
}

/// Build the lookup index, reporting the first repeated symbol
#[cfg(not(feature = "hashmap-lookup"))]
fn index_symbols(chars: &[char]) -> (SymbolIndex, Option<char>) {
    let mut index: Vec<(char, usize)> = chars
        .iter()
        .enumerate()
        .map(|(value, &symbol)| (symbol, value))
        .collect();
    index.sort_unstable();

    let duplicate = index
        .windows(2)
        .find(|pair| pair[0].0 == pair[1].0)
        .map(|pair| pair[0].0);

    (index, duplicate)
}

// =============================================================================
// Built-in alphabet selection
// =============================================================================

/// The six alphabets shipped with the crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinAlphabet {
    Numeric,
    Mod112,
    Hex,
    Alpha,
    Alphanumeric,
    Mod372,
}

impl BuiltinAlphabet {
    /// All built-in alphabets
    pub const ALL: [BuiltinAlphabet; 6] = [
        Self::Numeric,
        Self::Mod112,
        Self::Hex,
        Self::Alpha,
        Self::Alphanumeric,
        Self::Mod372,
    ];

    /// Shared character set for this alphabet
    pub fn charset(self) -> &'static CharacterSet {
        match self {
            Self::Numeric => CharacterSet::numeric(),
            Self::Mod112 => CharacterSet::mod_11_2(),
            Self::Hex => CharacterSet::hex(),
            Self::Alpha => CharacterSet::alpha(),
            Self::Alphanumeric => CharacterSet::alphanumeric(),
            Self::Mod372 => CharacterSet::mod_37_2(),
        }
    }

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Mod112 => "mod112",
            Self::Hex => "hex",
            Self::Alpha => "alpha",
            Self::Alphanumeric => "alphanumeric",
            Self::Mod372 => "mod372",
        }
    }
}

impl fmt::Display for BuiltinAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
