//! Test-harness integration for the matcher set.
//!
//! `expect(&actual).bn_lt(&threshold)` evaluates the registered matcher and
//! panics with its diagnostic when the comparison fails, which the Rust test
//! harness reports as a failed test. Passing comparisons are silent.
//!
//! ```rust
//! use bn_assert::{expect, Amount};
//!
//! let fee_paid = Amount::from(-3_500_000).muln(-1);
//! expect(&fee_paid)
//!     .with_message("transfer fee")
//!     .bn_lt(&Amount::from(4_000_000));
//! ```

use crate::amount::Amount;
use crate::error::Result;
use crate::matchers::ComparisonResult;
use crate::registry::{init_matchers, MatcherArgs, MatcherKind};

/// Starts a scalar expectation on `actual`.
pub fn expect(actual: &Amount) -> Expectation<'_> {
    Expectation {
        actual,
        message: String::new(),
    }
}

/// Starts a collection expectation on `actual`.
pub fn expect_all(actual: &[Amount]) -> CollectionExpectation<'_> {
    CollectionExpectation {
        actual,
        message: String::new(),
    }
}

/// Pending assertion on a single amount.
#[derive(Debug, Clone)]
pub struct Expectation<'a> {
    actual: &'a Amount,
    message: String,
}

impl<'a> Expectation<'a> {
    /// Attaches caller context printed with the diagnostic.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Evaluates a scalar matcher without failing the test.
    ///
    /// Errors with `ArgumentMismatch` for [`MatcherKind::CollectionBnEqual`].
    pub fn evaluate(&self, kind: MatcherKind, expected: &Amount) -> Result<ComparisonResult> {
        init_matchers().invoke(
            kind.name(),
            MatcherArgs::Scalar {
                expected: self.actual,
                received: expected,
                message: &self.message,
            },
        )
    }

    #[track_caller]
    fn check(&self, kind: MatcherKind, expected: &Amount) {
        match self.evaluate(kind, expected) {
            Ok(result) if result.passed => {}
            Ok(result) => panic!("{} failed\n{}", kind, result.message()),
            Err(err) => panic!("{}", err),
        }
    }

    #[track_caller]
    pub fn bn_equal(&self, expected: &Amount) {
        self.check(MatcherKind::BnEqual, expected);
    }

    #[track_caller]
    pub fn bn_lt(&self, expected: &Amount) {
        self.check(MatcherKind::BnLt, expected);
    }

    #[track_caller]
    pub fn bn_lte(&self, expected: &Amount) {
        self.check(MatcherKind::BnLte, expected);
    }

    #[track_caller]
    pub fn bn_gt(&self, expected: &Amount) {
        self.check(MatcherKind::BnGt, expected);
    }

    #[track_caller]
    pub fn bn_gte(&self, expected: &Amount) {
        self.check(MatcherKind::BnGte, expected);
    }
}

/// Pending assertion on an ordered sequence of amounts.
#[derive(Debug, Clone)]
pub struct CollectionExpectation<'a> {
    actual: &'a [Amount],
    message: String,
}

impl<'a> CollectionExpectation<'a> {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Evaluates `collectionBnEqual` without failing the test.
    pub fn evaluate(&self, expected: &[Amount]) -> Result<ComparisonResult> {
        init_matchers().invoke(
            MatcherKind::CollectionBnEqual.name(),
            MatcherArgs::Collection {
                expected: self.actual,
                received: expected,
                message: &self.message,
            },
        )
    }

    #[track_caller]
    pub fn collection_bn_equal(&self, expected: &[Amount]) {
        match self.evaluate(expected) {
            Ok(result) if result.passed => {}
            Ok(result) => panic!(
                "{} failed\n{}",
                MatcherKind::CollectionBnEqual,
                result.message()
            ),
            Err(err) => panic!("{}", err),
        }
    }
}
