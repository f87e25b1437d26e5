//! Diagnostic rendering shared by every matcher.
//!
//! The comparison itself always runs at full precision. This module only decides
//! how operands are *shown*: a pair of safe integers renders as machine numbers,
//! anything wider renders both operands as decimal strings. The distinction is
//! visible in JSON output, where a number above 2^53 would be corrupted by
//! consumers that parse numbers as doubles.

use crate::amount::Amount;
use crate::config;
use serde::Serialize;
use std::fmt;

/// An operand as it appears in a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderedOperand {
    /// Safe integer, rendered as a machine number
    Number(i64),
    /// Wide integer, rendered as its exact decimal string
    Decimal(String),
}

impl fmt::Display for RenderedOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedOperand::Number(n) => write!(f, "{}", n),
            RenderedOperand::Decimal(s) => f.write_str(s),
        }
    }
}

/// Renders a pair of operands with one rule applied to both.
pub fn format_operands_for_diagnostic(
    expected: &Amount,
    received: &Amount,
) -> (RenderedOperand, RenderedOperand) {
    let as_numbers = config::renders_as_number(expected.bit_length(), received.bit_length())
        .then(|| expected.to_i64().zip(received.to_i64()))
        .flatten();

    match as_numbers {
        Some((e, r)) => (RenderedOperand::Number(e), RenderedOperand::Number(r)),
        None => (
            RenderedOperand::Decimal(expected.to_string()),
            RenderedOperand::Decimal(received.to_string()),
        ),
    }
}

/// Renders a sequence the way the suite prints `BN[]`: comma-joined decimals.
pub fn format_collection(values: &[Amount]) -> String {
    values
        .iter()
        .map(Amount::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Separator printed between the two operands of a scalar diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationLabel {
    /// No relation word (equality and non-strict orderings)
    Plain,
    /// Strict orderings; `bnLt` and `bnGt` both print ` lt `
    Strict,
}

impl RelationLabel {
    fn as_str(self) -> &'static str {
        match self {
            RelationLabel::Plain => "  ",
            RelationLabel::Strict => " lt ",
        }
    }
}

/// Builds the scalar diagnostic text.
pub fn scalar_message(
    expected: &RenderedOperand,
    received: &RenderedOperand,
    label: RelationLabel,
    context: &str,
) -> String {
    format!(
        "Expected: {} \n{}Actual: {} \n {}",
        expected,
        label.as_str(),
        received,
        context
    )
}

/// Builds the collection diagnostic text.
pub fn collection_message(expected: &str, received: &str, context: &str) -> String {
    format!(
        "Expected: [ {} ] \n  Actual: [ {} ] \n {}",
        expected, received, context
    )
}
