//! The big-number matcher set.
//!
//! Each matcher takes the subject of the assertion first (`expected`, the value
//! handed to `expect(..)`), the comparison target second (`received`) and an
//! optional caller context. They are pure functions: no panics, no errors, no
//! shared state. A failing predicate is reported as `passed == false`.
//!
//! ```rust
//! use bn_assert::{matchers, Amount};
//!
//! let paid = Amount::from(-3).muln(-1);
//! let result = matchers::bn_lt(&paid, &Amount::from(4), "transfer fee");
//! assert!(result.passed);
//! ```

use crate::amount::Amount;
use crate::config;
use crate::diagnostic::{
    collection_message, format_collection, format_operands_for_diagnostic, scalar_message,
    RelationLabel, RenderedOperand,
};
use serde::Serialize;

/// Pre-rendered operands of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Operands {
    Scalar {
        expected: RenderedOperand,
        received: RenderedOperand,
        #[serde(skip_serializing)]
        label: RelationLabel,
    },
    Collection {
        expected: String,
        received: String,
    },
}

/// Outcome of one matcher invocation.
///
/// The message is built on demand by [`ComparisonResult::message`]; the host
/// only asks for it when rendering a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub matcher: &'static str,
    pub passed: bool,
    #[serde(flatten)]
    operands: Operands,
    #[serde(rename = "message")]
    context: String,
}

impl ComparisonResult {
    /// Renders the diagnostic. Identical inputs always give identical text.
    pub fn message(&self) -> String {
        match &self.operands {
            Operands::Scalar {
                expected,
                received,
                label,
            } => scalar_message(expected, received, *label, &self.context),
            Operands::Collection { expected, received } => {
                collection_message(expected, received, &self.context)
            }
        }
    }

    /// The caller-supplied context string.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Serializes the result as a single JSON object.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn scalar(
    matcher: &'static str,
    passed: bool,
    expected: &Amount,
    received: &Amount,
    label: RelationLabel,
    message: &str,
) -> ComparisonResult {
    let (expected, received) = format_operands_for_diagnostic(expected, received);
    ComparisonResult {
        matcher,
        passed,
        operands: Operands::Scalar {
            expected,
            received,
            label,
        },
        context: message.to_string(),
    }
}

/// `expected == received`
pub fn bn_equal(expected: &Amount, received: &Amount, message: &str) -> ComparisonResult {
    scalar(
        config::BN_EQUAL,
        expected == received,
        expected,
        received,
        RelationLabel::Plain,
        message,
    )
}

/// `expected < received`
pub fn bn_lt(expected: &Amount, received: &Amount, message: &str) -> ComparisonResult {
    scalar(
        config::BN_LT,
        expected < received,
        expected,
        received,
        RelationLabel::Strict,
        message,
    )
}

/// `expected <= received`
pub fn bn_lte(expected: &Amount, received: &Amount, message: &str) -> ComparisonResult {
    scalar(
        config::BN_LTE,
        expected <= received,
        expected,
        received,
        RelationLabel::Plain,
        message,
    )
}

/// `expected > received`
pub fn bn_gt(expected: &Amount, received: &Amount, message: &str) -> ComparisonResult {
    scalar(
        config::BN_GT,
        expected > received,
        expected,
        received,
        RelationLabel::Strict,
        message,
    )
}

/// `expected >= received`
pub fn bn_gte(expected: &Amount, received: &Amount, message: &str) -> ComparisonResult {
    scalar(
        config::BN_GTE,
        expected >= received,
        expected,
        received,
        RelationLabel::Plain,
        message,
    )
}

/// Element-wise equality; sequences of different length never match.
pub fn collection_bn_equal(
    expected: &[Amount],
    received: &[Amount],
    message: &str,
) -> ComparisonResult {
    let passed = expected.len() == received.len()
        && expected.iter().zip(received).all(|(e, r)| e == r);

    ComparisonResult {
        matcher: config::COLLECTION_BN_EQUAL,
        passed,
        operands: Operands::Collection {
            expected: format_collection(expected),
            received: format_collection(received),
        },
        context: message.to_string(),
    }
}
