//! High-level assertion helpers for common test patterns.
//!
//! Declarative assertion functions over matcher results.

#![allow(dead_code)]

use bn_assert::{Amount, ComparisonResult, MatcherArgs, MatcherKind, MatcherRegistry};

/// Asserts that a matcher result passed, printing its diagnostic otherwise.
pub fn assert_passes(result: &ComparisonResult) {
    assert!(
        result.passed,
        "Expected {} to pass, but it failed:\n{}",
        result.matcher,
        result.message()
    );
}

/// Asserts that a matcher result failed and its diagnostic contains a substring.
pub fn assert_fails_with(result: &ComparisonResult, expected_substring: &str) {
    assert!(
        !result.passed,
        "Expected {} to fail, but it passed:\n{}",
        result.matcher,
        result.message()
    );
    let message = result.message();
    assert!(
        message.contains(expected_substring),
        "Expected diagnostic to contain '{}', but got: {}",
        expected_substring,
        message
    );
}

/// Asserts that every result in a batch passed.
pub fn assert_all_pass<'a>(results: impl IntoIterator<Item = &'a ComparisonResult>) {
    for result in results {
        assert_passes(result);
    }
}

/// Runs a scalar matcher by name and returns whether it passed.
pub fn scalar_passes(registry: &MatcherRegistry, kind: MatcherKind, a: &Amount, b: &Amount) -> bool {
    registry
        .invoke(
            kind.name(),
            MatcherArgs::Scalar {
                expected: a,
                received: b,
                message: "",
            },
        )
        .expect("scalar matcher should accept scalar operands")
        .passed
}

/// Asserts that a result contains an error with a specific substring in the error message.
pub fn assert_error_contains<T, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_substring: &str,
) {
    match result {
        Ok(_) => panic!(
            "Expected error containing '{}', but operation succeeded",
            expected_substring
        ),
        Err(error) => {
            let error_msg = format!("{}", error);
            assert!(
                error_msg.contains(expected_substring),
                "Expected error message to contain '{}', but got: {}",
                expected_substring,
                error_msg
            );
        }
    }
}
