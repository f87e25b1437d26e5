//! Centralized configuration for the bn-assert library.
//!
//! This module contains constants shared by the matchers, the parser and the
//! accounting checks so that the rendering rule and the registered names stay
//! consistent across the crate.

// --- Diagnostic Rendering ---

/// Magnitudes with fewer bits than this render as machine numbers in diagnostics,
/// so the largest number-rendered magnitude is 2^52 - 1.
pub const SAFE_INTEGER_BITS: u64 = 53;

/// Decide how a pair of operands is rendered from their bit lengths.
/// Returns `true` when both fit the safe-integer range.
#[inline]
pub fn renders_as_number(lhs_bits: u64, rhs_bits: u64) -> bool {
    lhs_bits < SAFE_INTEGER_BITS && rhs_bits < SAFE_INTEGER_BITS
}

// --- Matcher Names ---

/// Exact numeric equality
pub const BN_EQUAL: &str = "bnEqual";

/// Strict less-than
pub const BN_LT: &str = "bnLt";

/// Less-than-or-equal
pub const BN_LTE: &str = "bnLte";

/// Strict greater-than
pub const BN_GT: &str = "bnGt";

/// Greater-than-or-equal
pub const BN_GTE: &str = "bnGte";

/// Element-wise equality over two ordered sequences
pub const COLLECTION_BN_EQUAL: &str = "collectionBnEqual";

/// Every registered matcher name, in registration order.
pub const MATCHER_NAMES: [&str; 6] = [
    BN_EQUAL,
    BN_LT,
    BN_LTE,
    BN_GT,
    BN_GTE,
    COLLECTION_BN_EQUAL,
];

// --- Amount Parsing ---

/// Prefix marking a hexadecimal amount (chain JSON encodes balances this way)
pub const HEX_PREFIX: &str = "0x";

/// Digit-group separators accepted in decimal input ("1,000,000" from human-readable chain output)
pub const GROUP_SEPARATORS: [char; 2] = [',', '_'];

/// Digits in every group after the leading one
pub const DIGIT_GROUP_WIDTH: usize = 3;

// --- Token Constants ---

/// Decimals of the native token; one unit is 10^18 base units.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// Currency id of the native token
pub const NATIVE_ASSET_ID: u32 = 0;
