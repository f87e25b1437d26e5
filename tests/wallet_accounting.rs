//! Wallet snapshots and fee-lock accounting across simulated swaps.

use bn_assert::{
    accounting::{
        claim_settled, fee_lock_applied, fee_lock_released, fee_within_bounds, no_fee_lock,
        rewards_accrued, rewards_claimed_equally,
    },
    config::NATIVE_ASSET_ID,
    expect, AccountFeeLockData, Amount, BnAssertError, RewardsInfo, TokenBalance, UserWallet,
    WalletPhase,
};
use std::collections::BTreeMap;

mod common;
use common::assertions::{assert_all_pass, assert_error_contains, assert_passes};
use common::fixtures::{FIRST_CURRENCY, SECOND_CURRENCY, THRESHOLD_VALUE};
use common::{mg_units, swap_scenario};

#[test]
fn test_swap_below_threshold_locks_fee() {
    let scenario = swap_scenario(Amount::from(THRESHOLD_VALUE - 5));
    assert!(!scenario.metadata.is_swap_lock_free(
        FIRST_CURRENCY,
        SECOND_CURRENCY,
        &scenario.sold_amount
    ));

    let native = scenario.native_diff();
    assert_passes(&fee_lock_applied(&native, &scenario.metadata));
    expect(&native.free).bn_equal(&scenario.metadata.fee_lock_amount.muln(-1));

    let reduced = scenario
        .wallet
        .validate_wallet_reduced(FIRST_CURRENCY, &scenario.sold_amount)
        .unwrap();
    assert_passes(&reduced);
    let increased = scenario
        .wallet
        .validate_wallet_increased(SECOND_CURRENCY, &scenario.bought_amount)
        .unwrap();
    assert_passes(&increased);
}

#[test]
fn test_swap_above_threshold_is_lock_free() {
    let scenario = swap_scenario(Amount::from(THRESHOLD_VALUE * 2));
    let diffs: Vec<TokenBalance> = scenario
        .wallet
        .wallet_differences()
        .into_iter()
        .map(|d| d.diff)
        .collect();
    assert_all_pass(&no_fee_lock(&diffs));

    let native = scenario.native_diff();
    assert!(!fee_lock_applied(&native, &scenario.metadata).passed);
    expect(&native.free).bn_equal(&Amount::zero());
}

#[test]
fn test_swap_at_exact_threshold_is_lock_free() {
    let scenario = swap_scenario(Amount::from(THRESHOLD_VALUE));
    expect(&scenario.native_diff().reserved).bn_equal(&Amount::zero());
}

#[test]
fn test_non_whitelisted_pair_always_locks() {
    let metadata = common::fixtures::fee_lock_metadata();
    let huge = mg_units(1_000_000);
    assert!(!metadata.is_swap_lock_free(SECOND_CURRENCY, 7, &huge));
    assert!(metadata.is_swap_lock_free(7, NATIVE_ASSET_ID, &huge));
}

#[test]
fn test_fee_lock_release_after_period() {
    let metadata = common::fixtures::fee_lock_metadata();
    let lock = AccountFeeLockData {
        total_fee_lock_amount: metadata.fee_lock_amount.clone(),
        last_fee_lock_block: Amount::from(120),
    };
    assert!(!lock.can_unlock(&Amount::from(129), &metadata.period_length));
    assert!(lock.can_unlock(&Amount::from(130), &metadata.period_length));

    let mut wallet = UserWallet::new();
    wallet.add_asset(NATIVE_ASSET_ID);
    let locked = TokenBalance::new(mg_units(950), mg_units(50), Amount::zero());
    wallet.record(WalletPhase::Before, NATIVE_ASSET_ID, locked).unwrap();
    wallet
        .record(WalletPhase::After, NATIVE_ASSET_ID, TokenBalance::free(mg_units(1_000)))
        .unwrap();

    let diff = &wallet.wallet_differences()[0].diff;
    assert_passes(&fee_lock_released(diff, &lock));
}

#[test]
fn test_transfer_fee_bounds() {
    let mut wallet = UserWallet::new();
    wallet.add_asset(NATIVE_ASSET_ID);
    wallet
        .record(
            WalletPhase::Before,
            NATIVE_ASSET_ID,
            TokenBalance::free(Amount::parse("5,000,000,000,000,000,000").unwrap()),
        )
        .unwrap();
    wallet
        .record(
            WalletPhase::After,
            NATIVE_ASSET_ID,
            TokenBalance::free(Amount::parse("1,500,000,000,000,000,000").unwrap()),
        )
        .unwrap();

    let free_delta = wallet.wallet_differences()[0].diff.free.clone();
    let checks = fee_within_bounds(&free_delta, &Amount::zero(), &mg_units(4));
    assert_all_pass(&checks);

    let too_tight = fee_within_bounds(&free_delta, &Amount::zero(), &mg_units(3));
    assert!(!too_tight[0].passed);
    assert!(too_tight[1].passed);
}

#[test]
fn test_untouched_wallet_is_unmodified() {
    let mut wallet = UserWallet::new();
    wallet.add_assets([NATIVE_ASSET_ID, FIRST_CURRENCY]);
    let balances: BTreeMap<u32, TokenBalance> = [
        (NATIVE_ASSET_ID, TokenBalance::free(mg_units(10))),
        (FIRST_CURRENCY, TokenBalance::new(mg_units(1), mg_units(2), mg_units(3))),
    ]
    .into_iter()
    .collect();
    wallet.refresh(WalletPhase::Before, &balances);
    wallet.refresh(WalletPhase::After, &balances);

    let results = wallet.validate_wallets_unmodified();
    assert_eq!(results.len(), 6);
    assert_all_pass(&results);
}

#[test]
fn test_untracked_currency_is_an_error() {
    let mut wallet = UserWallet::new();
    let result = wallet.record(WalletPhase::Before, 9, TokenBalance::default());
    assert!(matches!(result, Err(BnAssertError::MissingAsset { currency_id: 9 })));
    assert_error_contains(
        wallet.validate_wallet_reduced(9, &Amount::one()),
        "currency 9",
    );
}

#[test]
fn test_balance_json_from_chain() {
    let balance = TokenBalance::from_json(
        r#"{"free": "0x4563918244f40000", "reserved": "1,000", "miscFrozen": 2, "feeFrozen": 3}"#,
    )
    .unwrap();
    assert_eq!(balance.free, mg_units(5));
    assert_eq!(balance.reserved, Amount::from(1000));
    assert_eq!(balance.frozen, Amount::from(5));
}

#[test]
fn test_rewards_claim_flow() {
    let before = RewardsInfo::from_json(
        r#"{"activatedAmount": "1000000000000000000000", "rewardsNotYetClaimed": "1000000000000001", "rewardsAlreadyClaimed": "0"}"#,
    )
    .unwrap();
    let after = RewardsInfo {
        rewards_not_yet_claimed: Amount::zero(),
        rewards_already_claimed: Amount::parse("1000000000000001").unwrap(),
        ..before.clone()
    };
    assert_all_pass(&claim_settled(&before, &after));

    let short_claim = RewardsInfo {
        rewards_already_claimed: Amount::unit(15),
        ..after.clone()
    };
    let [remaining, claimed] = claim_settled(&before, &short_claim);
    assert_passes(&remaining);
    assert!(!claimed.passed);

    let later = RewardsInfo {
        rewards_not_yet_claimed: &before.rewards_not_yet_claimed + &Amount::one(),
        ..before.clone()
    };
    assert_passes(&rewards_accrued(&before, &later));
    assert_passes(&rewards_claimed_equally(
        &after.rewards_already_claimed,
        &Amount::parse("1_000_000_000_000_001").unwrap(),
    ));
}
