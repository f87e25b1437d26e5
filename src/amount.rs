//! Arbitrary-precision token amounts.
//!
//! [`Amount`] is the single operand type accepted by every matcher. It wraps a
//! signed [`BigInt`] and is compared strictly by numeric value. Nothing in this
//! module converts through a floating-point type.
//!
//! Amounts arrive from the chain in three textual shapes, all accepted by
//! [`Amount::parse`]:
//!
//! - plain decimal: `"5000000000000000000"`
//! - human-readable decimal with group separators: `"1,000,000"`
//! - hexadecimal with a `0x` prefix: `"0x0de0b6b3a7640000"`

use crate::config::{DIGIT_GROUP_WIDTH, GROUP_SEPARATORS, HEX_PREFIX, SAFE_INTEGER_BITS};
use crate::error::{BnAssertError, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// An immutable signed integer of unbounded magnitude.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(BigInt);

impl Amount {
    /// The zero amount.
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// The amount one.
    pub fn one() -> Self {
        Self(BigInt::one())
    }

    /// One whole token with `decimals` fractional digits, i.e. `10^decimals`.
    pub fn unit(decimals: u32) -> Self {
        Self(num_traits::pow(BigInt::from(10u8), decimals as usize))
    }

    /// Parses a decimal (optionally digit-grouped) or `0x`-prefixed hex integer.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || BnAssertError::InvalidAmount {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let hex_body = unsigned
            .strip_prefix(HEX_PREFIX)
            .or_else(|| unsigned.strip_prefix("0X"));

        let magnitude = match hex_body {
            Some(body) => {
                if body.is_empty() || !body.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(invalid());
                }
                BigInt::parse_bytes(body.as_bytes(), 16).ok_or_else(invalid)?
            }
            None => {
                let digits = ungroup_digits(unsigned).ok_or_else(invalid)?;
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?
            }
        };

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Number of bits in the magnitude; zero has bit length 0.
    pub fn bit_length(&self) -> u64 {
        self.0.bits()
    }

    /// Whether the value renders as a machine number in diagnostics.
    ///
    /// The cutoff is `bit_length() < 53`, i.e. magnitudes below 2^52. This is
    /// one bit stricter than the double-precision safe range (2^53 - 1).
    pub fn is_safe_integer(&self) -> bool {
        self.bit_length() < SAFE_INTEGER_BITS
    }

    /// Converts to `i64` only when [`Amount::is_safe_integer`] holds.
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_safe_integer() {
            self.0.to_i64()
        } else {
            None
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Multiplies by a machine integer (`BN.muln` in the chain SDK).
    pub fn muln(&self, factor: i64) -> Self {
        Self(&self.0 * BigInt::from(factor))
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Truncating division; `None` on a zero divisor.
    pub fn checked_div(&self, divisor: &Amount) -> Option<Self> {
        if divisor.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &divisor.0))
        }
    }

    /// Borrow the underlying big integer.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub fn into_bigint(self) -> BigInt {
        self.0
    }
}

/// Removes digit-group separators, or `None` when the grouping is malformed.
///
/// Only one separator kind may appear. The leading group holds 1 to 3 digits and
/// every later group exactly 3, so "1,000" is accepted and "1,00", "1,,000" or
/// "1_000,000" are not.
fn ungroup_digits(text: &str) -> Option<String> {
    let Some(separator) = text.chars().find(|c| GROUP_SEPARATORS.contains(c)) else {
        return Some(text.to_string());
    };

    let mut groups = text.split(separator);
    let leading = groups.next()?;
    if leading.is_empty() || leading.len() > DIGIT_GROUP_WIDTH {
        return None;
    }

    let mut digits = leading.to_string();
    for group in groups {
        // A second separator kind inside a group also fails the digit check later
        if group.len() != DIGIT_GROUP_WIDTH {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = BnAssertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<BigInt> for Amount {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

macro_rules! impl_from_machine_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Amount {
                fn from(value: $ty) -> Self {
                    Self(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_machine_int!(i32, i64, i128, u32, u64, u128);

// --- Operators ---

impl Add for &Amount {
    type Output = Amount;

    fn add(self, rhs: &Amount) -> Amount {
        Amount(&self.0 + &rhs.0)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for &Amount {
    type Output = Amount;

    fn sub(self, rhs: &Amount) -> Amount {
        Amount(&self.0 - &rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Mul for &Amount {
    type Output = Amount;

    fn mul(self, rhs: &Amount) -> Amount {
        Amount(&self.0 * &rhs.0)
    }
}

impl Mul for Amount {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Amount {
        Amount(self.0 * rhs.0)
    }
}

impl Neg for &Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-&self.0)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

// --- Serde ---

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a decimal/hex integer string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Amount, E> {
        Ok(Amount::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Amount, E> {
        Ok(Amount::from(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> std::result::Result<Amount, E> {
        Ok(Amount::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> std::result::Result<Amount, E> {
        Ok(Amount::from(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Amount, E> {
        Amount::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}
