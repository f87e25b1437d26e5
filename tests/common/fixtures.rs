//! Test fixtures and scenario configuration.
//!
//! This module provides amount helpers and the `SwapScenario` struct, a
//! simulated before/after chain state for a single swap on a test account.

#![allow(dead_code)]

use bn_assert::{
    config::{DEFAULT_TOKEN_DECIMALS, NATIVE_ASSET_ID},
    Amount, FeeLockMetadata, TokenBalance, UserWallet, WalletPhase,
};
use std::collections::BTreeMap;

/// First non-native currency used by the scenarios
pub const FIRST_CURRENCY: u32 = 4;

/// Second non-native currency used by the scenarios
pub const SECOND_CURRENCY: u32 = 5;

/// Swap value threshold configured in the fee-lock scenarios
pub const THRESHOLD_VALUE: i64 = 666;

/// `n` whole native tokens in base units.
pub fn mg_units(n: i64) -> Amount {
    Amount::from(n) * Amount::unit(DEFAULT_TOKEN_DECIMALS)
}

/// Fee-lock configuration with the native token and `FIRST_CURRENCY` whitelisted.
pub fn fee_lock_metadata() -> FeeLockMetadata {
    FeeLockMetadata {
        period_length: Amount::from(10),
        fee_lock_amount: mg_units(50),
        swap_value_threshold: Amount::from(THRESHOLD_VALUE),
        whitelisted_tokens: [NATIVE_ASSET_ID, FIRST_CURRENCY].into_iter().collect(),
    }
}

/// A tracked wallet plus the parameters the swap was run with.
#[derive(Debug, Clone)]
pub struct SwapScenario {
    pub wallet: UserWallet,
    pub metadata: FeeLockMetadata,
    pub sold_amount: Amount,
    pub bought_amount: Amount,
}

impl SwapScenario {
    pub fn native_diff(&self) -> TokenBalance {
        self.diff_of(NATIVE_ASSET_ID)
    }

    pub fn diff_of(&self, currency_id: u32) -> TokenBalance {
        self.wallet
            .wallet_differences()
            .into_iter()
            .find(|d| d.currency_id == currency_id)
            .map(|d| d.diff)
            .expect("currency should be tracked by the scenario")
    }
}

/// Simulates selling `sold_amount` of `FIRST_CURRENCY` for `SECOND_CURRENCY`.
///
/// Below the threshold the runtime reserves the fee lock on the native token;
/// at or above it the swap is lock free. The bought amount is a fixed half of
/// the sold amount; pricing is not under test here.
pub fn swap_scenario(sold_amount: Amount) -> SwapScenario {
    let metadata = fee_lock_metadata();
    let initial = mg_units(1_000);

    let mut wallet = UserWallet::new();
    wallet.add_assets([NATIVE_ASSET_ID, FIRST_CURRENCY, SECOND_CURRENCY]);

    let before: BTreeMap<u32, TokenBalance> = [NATIVE_ASSET_ID, FIRST_CURRENCY, SECOND_CURRENCY]
        .into_iter()
        .map(|id| (id, TokenBalance::free(initial.clone())))
        .collect();
    wallet.refresh(WalletPhase::Before, &before);

    let bought_amount = sold_amount
        .checked_div(&Amount::from(2))
        .expect("non-zero divisor");
    let lock_free = metadata.is_swap_lock_free(FIRST_CURRENCY, SECOND_CURRENCY, &sold_amount);

    let native_after = if lock_free {
        TokenBalance::free(initial.clone())
    } else {
        TokenBalance::new(
            &initial - &metadata.fee_lock_amount,
            metadata.fee_lock_amount.clone(),
            Amount::zero(),
        )
    };

    let mut after = BTreeMap::new();
    after.insert(NATIVE_ASSET_ID, native_after);
    after.insert(FIRST_CURRENCY, TokenBalance::free(&initial - &sold_amount));
    after.insert(SECOND_CURRENCY, TokenBalance::free(&initial + &bought_amount));
    wallet.refresh(WalletPhase::After, &after);

    SwapScenario {
        wallet,
        metadata,
        sold_amount,
        bought_amount,
    }
}
