//! Write-once matcher registration.
//!
//! The registry maps each matcher name to its pure function. The process-wide
//! table is installed by [`init_matchers`] the first time it is called and is
//! read-only afterwards, so parallel test threads share it without locking.
//! Callers that prefer explicit threading can build an independent table with
//! [`MatcherRegistry::new`].

use crate::amount::Amount;
use crate::config;
use crate::error::{BnAssertError, Result};
use crate::matchers::{self, ComparisonResult};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Scalar matcher signature: `(expected, received, message)`.
pub type ScalarMatcherFn = fn(&Amount, &Amount, &str) -> ComparisonResult;

/// Collection matcher signature: `(expected, received, message)`.
pub type CollectionMatcherFn = fn(&[Amount], &[Amount], &str) -> ComparisonResult;

/// A registered matcher function.
#[derive(Clone, Copy)]
pub enum MatcherFn {
    Scalar(ScalarMatcherFn),
    Collection(CollectionMatcherFn),
}

impl fmt::Debug for MatcherFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherFn::Scalar(_) => f.write_str("MatcherFn::Scalar"),
            MatcherFn::Collection(_) => f.write_str("MatcherFn::Collection"),
        }
    }
}

/// The six built-in matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    BnEqual,
    BnLt,
    BnLte,
    BnGt,
    BnGte,
    CollectionBnEqual,
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 6] = [
        MatcherKind::BnEqual,
        MatcherKind::BnLt,
        MatcherKind::BnLte,
        MatcherKind::BnGt,
        MatcherKind::BnGte,
        MatcherKind::CollectionBnEqual,
    ];

    /// Registered name of the matcher.
    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::BnEqual => config::BN_EQUAL,
            MatcherKind::BnLt => config::BN_LT,
            MatcherKind::BnLte => config::BN_LTE,
            MatcherKind::BnGt => config::BN_GT,
            MatcherKind::BnGte => config::BN_GTE,
            MatcherKind::CollectionBnEqual => config::COLLECTION_BN_EQUAL,
        }
    }

    /// The function implementing this matcher.
    pub fn function(self) -> MatcherFn {
        match self {
            MatcherKind::BnEqual => MatcherFn::Scalar(matchers::bn_equal),
            MatcherKind::BnLt => MatcherFn::Scalar(matchers::bn_lt),
            MatcherKind::BnLte => MatcherFn::Scalar(matchers::bn_lte),
            MatcherKind::BnGt => MatcherFn::Scalar(matchers::bn_gt),
            MatcherKind::BnGte => MatcherFn::Scalar(matchers::bn_gte),
            MatcherKind::CollectionBnEqual => MatcherFn::Collection(matchers::collection_bn_equal),
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatcherKind {
    type Err = BnAssertError;

    fn from_str(s: &str) -> Result<Self> {
        MatcherKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| BnAssertError::UnknownMatcher {
                name: s.to_string(),
            })
    }
}

/// Operands handed to [`MatcherRegistry::invoke`].
#[derive(Debug, Clone, Copy)]
pub enum MatcherArgs<'a> {
    Scalar {
        expected: &'a Amount,
        received: &'a Amount,
        message: &'a str,
    },
    Collection {
        expected: &'a [Amount],
        received: &'a [Amount],
        message: &'a str,
    },
}

/// Immutable name-to-function table.
#[derive(Debug, Clone)]
pub struct MatcherRegistry {
    matchers: BTreeMap<&'static str, MatcherFn>,
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MatcherRegistry {
    /// Builds a table holding every built-in matcher.
    pub fn new() -> Self {
        let matchers = MatcherKind::ALL
            .into_iter()
            .map(|kind| (kind.name(), kind.function()))
            .collect();
        Self { matchers }
    }

    /// Looks up a matcher by registered name.
    pub fn get(&self, name: &str) -> Result<MatcherFn> {
        self.matchers
            .get(name)
            .copied()
            .ok_or_else(|| BnAssertError::UnknownMatcher {
                name: name.to_string(),
            })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Runs the named matcher.
    ///
    /// Returns an error only for an unknown name or an argument shape the
    /// matcher does not take; a failed comparison is an `Ok` result.
    pub fn invoke(&self, name: &str, args: MatcherArgs<'_>) -> Result<ComparisonResult> {
        let function = self.get(name)?;
        let kind = MatcherKind::from_str(name)?;
        trace!(matcher = name, "invoking matcher");

        match (function, args) {
            (
                MatcherFn::Scalar(f),
                MatcherArgs::Scalar {
                    expected,
                    received,
                    message,
                },
            ) => Ok(f(expected, received, message)),
            (
                MatcherFn::Collection(f),
                MatcherArgs::Collection {
                    expected,
                    received,
                    message,
                },
            ) => Ok(f(expected, received, message)),
            (MatcherFn::Scalar(_), MatcherArgs::Collection { .. }) => {
                Err(BnAssertError::ArgumentMismatch {
                    matcher: kind.name(),
                    expected: "scalar",
                })
            }
            (MatcherFn::Collection(_), MatcherArgs::Scalar { .. }) => {
                Err(BnAssertError::ArgumentMismatch {
                    matcher: kind.name(),
                    expected: "collection",
                })
            }
        }
    }
}

static MATCHERS: OnceCell<MatcherRegistry> = OnceCell::new();

/// Installs the process-wide matcher table and returns it.
///
/// Must run before any test evaluates a matcher; the [`expect`](crate::expect)
/// layer calls it on first use. Repeated calls return the same table.
pub fn init_matchers() -> &'static MatcherRegistry {
    MATCHERS.get_or_init(|| {
        let registry = MatcherRegistry::new();
        debug!(count = registry.len(), "registered big-number matchers");
        registry
    })
}
