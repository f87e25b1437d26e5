//! Big-number matchers for parachain DEX end-to-end tests
//!
//! On-chain token amounts routinely exceed 2^53, so comparing them through a
//! fixed-width float silently corrupts balances. This library compares them as
//! arbitrary-precision integers and renders failures without losing a digit.
//!
//! ## Main Components
//!
//! - [`amount`]: The `Amount` operand type and its parsers (decimal, grouped, hex)
//! - [`matchers`]: `bnEqual`, `bnLt`, `bnLte`, `bnGt`, `bnGte`, `collectionBnEqual`
//! - [`diagnostic`]: Shared operand rendering for failure messages
//! - [`registry`]: The write-once matcher table
//! - [`expect`]: `expect(&actual).bn_lt(&expected)` for use inside `#[test]` functions
//! - [`wallet`]: Before/after balance snapshots for a test account
//! - [`accounting`]: Fee-lock and rewards accounting checks
//! - [`config`]: Centralized configuration constants
//!
//! ## Error Handling
//!
//! A failed comparison is a value, not an error: matchers return a
//! [`ComparisonResult`] with `passed == false`. Fallible operations return
//! `Result<T, BnAssertError>`:
//!
//! - `Amount::parse()` returns `Result<Amount, BnAssertError>`
//! - `MatcherRegistry::invoke()` returns `Result<ComparisonResult, BnAssertError>`
//! - `UserWallet::record()` returns `Result<(), BnAssertError>`
//!
//! ## Quick Start
//!
//! ```rust
//! use bn_assert::{expect, expect_all, init_matchers, Amount, BnAssertError};
//!
//! // 1. Install the matcher table once (expect() also does this on first use)
//! let registry = init_matchers();
//! assert_eq!(registry.len(), 6);
//!
//! // 2. Build amounts from chain output
//! let before = Amount::parse("5,000,000,000,000,000,000")?;
//! let after = Amount::parse("0x40f2b3344cd40000")?;
//!
//! // 3. Assert over the difference at full precision
//! let fee = (&after - &before).muln(-1);
//! expect(&fee).with_message("transfer fee").bn_lt(&(Amount::from(4) * Amount::unit(17)));
//! expect(&fee).bn_gt(&Amount::zero());
//!
//! // 4. Compare whole sequences
//! expect_all(&[Amount::from(100), Amount::from(200)])
//!     .collection_bn_equal(&[Amount::from(100), Amount::from(200)]);
//! # Ok::<(), BnAssertError>(())
//! ```

pub mod accounting;
pub mod amount;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod expect;
pub mod matchers;
pub mod registry;
pub mod wallet;

// Re-export commonly used types and functions for convenience
pub use accounting::{AccountFeeLockData, FeeLockMetadata, RewardsInfo};
pub use amount::Amount;
pub use diagnostic::{format_operands_for_diagnostic, RenderedOperand};
pub use error::{BnAssertError, Result};
pub use expect::{expect, expect_all, CollectionExpectation, Expectation};
pub use matchers::{bn_equal, bn_gt, bn_gte, bn_lt, bn_lte, collection_bn_equal, ComparisonResult};
pub use registry::{init_matchers, MatcherArgs, MatcherFn, MatcherKind, MatcherRegistry};
pub use wallet::{BalanceDiff, TokenBalance, UserWallet, WalletPhase};
