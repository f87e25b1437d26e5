//! Matcher table installation and lookup from concurrently running tests.

use bn_assert::{
    config::MATCHER_NAMES, init_matchers, Amount, BnAssertError, MatcherArgs, MatcherKind,
    MatcherRegistry,
};
use std::thread;

mod common;
use common::assertions::{assert_error_contains, scalar_passes};

#[test]
fn test_every_name_is_registered() {
    let registry = init_matchers();
    assert_eq!(registry.len(), MATCHER_NAMES.len());
    for name in MATCHER_NAMES {
        assert!(registry.get(name).is_ok(), "missing matcher {}", name);
    }
}

#[test]
fn test_concurrent_init_yields_one_table() {
    let handles: Vec<_> = (0..8i64)
        .map(|i| {
            thread::spawn(move || {
                let registry = init_matchers();
                let a = Amount::from(i);
                let b = Amount::from(i + 1);
                assert!(scalar_passes(registry, MatcherKind::BnLt, &a, &b));
                registry as *const MatcherRegistry as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect();
    let first = addresses[0];
    assert!(addresses.iter().all(|&addr| addr == first));
    assert_eq!(first, init_matchers() as *const MatcherRegistry as usize);
}

#[test]
fn test_unknown_matcher_name() {
    let registry = init_matchers();
    let a = Amount::from(1);
    let result = registry.invoke(
        "bnNotEqual",
        MatcherArgs::Scalar {
            expected: &a,
            received: &a,
            message: "",
        },
    );
    assert!(matches!(result, Err(BnAssertError::UnknownMatcher { .. })));
    assert_error_contains("toBeBn".parse::<MatcherKind>(), "Unknown matcher");
}

#[test]
fn test_argument_shape_is_checked() {
    let registry = init_matchers();
    let a = Amount::from(1);
    let values = [Amount::from(1)];

    assert_error_contains(
        registry.invoke(
            "bnEqual",
            MatcherArgs::Collection {
                expected: &values,
                received: &values,
                message: "",
            },
        ),
        "expects scalar operands",
    );
    assert_error_contains(
        registry.invoke(
            "collectionBnEqual",
            MatcherArgs::Scalar {
                expected: &a,
                received: &a,
                message: "",
            },
        ),
        "expects collection operands",
    );
}

#[test]
fn test_collection_kind_rejected_by_scalar_expectation() {
    let result = bn_assert::expect(&Amount::from(1))
        .evaluate(MatcherKind::CollectionBnEqual, &Amount::from(1));
    assert!(matches!(
        result,
        Err(BnAssertError::ArgumentMismatch {
            matcher: "collectionBnEqual",
            ..
        })
    ));
}
