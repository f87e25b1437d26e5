//! Fee-lock and rewards accounting checks.
//!
//! These are the numeric contracts the end-to-end suite asserts after swaps,
//! fee-lock releases and reward claims. Every check returns
//! [`ComparisonResult`]s built by the matchers so failures render the same
//! diagnostic as a direct `expect(..)`.
//!
//! ## Fee lock
//!
//! A swap below the value threshold (or between tokens that are not
//! whitelisted) reserves `fee_lock_amount` of the native token instead of
//! charging a fee. The lock can be released once `period_length` blocks have
//! passed since `last_fee_lock_block`.
//!
//! ## Rewards
//!
//! Liquidity rewards accrue into `rewards_not_yet_claimed`; a claim moves the
//! whole available amount into `rewards_already_claimed`.

use crate::amount::Amount;
use crate::error::Result;
use crate::matchers::{self, ComparisonResult};
use crate::wallet::TokenBalance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Runtime fee-lock configuration (`feeLock.feeLockMetadata`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeLockMetadata {
    pub period_length: Amount,
    pub fee_lock_amount: Amount,
    pub swap_value_threshold: Amount,
    #[serde(default)]
    pub whitelisted_tokens: BTreeSet<u32>,
}

impl FeeLockMetadata {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_whitelisted(&self, token: u32) -> bool {
        self.whitelisted_tokens.contains(&token)
    }

    /// Whether selling `amount` of `sold` for `bought` is free of a fee lock.
    pub fn is_swap_lock_free(&self, sold: u32, bought: u32, amount: &Amount) -> bool {
        (self.is_whitelisted(sold) || self.is_whitelisted(bought))
            && *amount >= self.swap_value_threshold
    }
}

/// Per-account fee-lock state (`feeLock.accountFeeLockData`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFeeLockData {
    pub total_fee_lock_amount: Amount,
    pub last_fee_lock_block: Amount,
}

impl AccountFeeLockData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// First block at which the lock may be released.
    pub fn unlock_block(&self, period_length: &Amount) -> Amount {
        &self.last_fee_lock_block + period_length
    }

    pub fn can_unlock(&self, current_block: &Amount, period_length: &Amount) -> bool {
        *current_block >= self.unlock_block(period_length)
    }
}

/// The reserved native balance grew by exactly `fee_lock_amount`.
pub fn fee_lock_applied(native_diff: &TokenBalance, metadata: &FeeLockMetadata) -> ComparisonResult {
    matchers::bn_equal(
        &native_diff.reserved,
        &metadata.fee_lock_amount,
        "reserved native balance should grow by the fee lock amount",
    )
}

/// The reserved native balance dropped by the whole previous lock.
pub fn fee_lock_released(native_diff: &TokenBalance, previous_lock: &AccountFeeLockData) -> ComparisonResult {
    matchers::bn_equal(
        &native_diff.reserved,
        &-&previous_lock.total_fee_lock_amount,
        "reserved native balance should drop by the released lock",
    )
}

/// No currency moved into or out of reserve.
pub fn no_fee_lock(diffs: &[TokenBalance]) -> Vec<ComparisonResult> {
    diffs
        .iter()
        .map(|diff| matchers::bn_equal(&diff.reserved, &Amount::zero(), "no tokens should be locked"))
        .collect()
}

/// The fee paid (the negated free delta) lies strictly between the bounds.
///
/// Returns the upper-bound check followed by the lower-bound check.
pub fn fee_within_bounds(
    free_delta: &Amount,
    lower: &Amount,
    upper: &Amount,
) -> [ComparisonResult; 2] {
    let paid = free_delta.muln(-1);
    [
        matchers::bn_lt(&paid, upper, "fee paid should stay below the upper bound"),
        matchers::bn_gt(&paid, lower, "fee paid should exceed the lower bound"),
    ]
}

/// Proof-of-stake rewards bookkeeping (`proofOfStake.rewardsInfo`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsInfo {
    #[serde(default)]
    pub activated_amount: Amount,
    #[serde(default)]
    pub rewards_not_yet_claimed: Amount,
    #[serde(default)]
    pub rewards_already_claimed: Amount,
    #[serde(default)]
    pub last_checkpoint: Amount,
    #[serde(default)]
    pub pool_ratio_at_last_checkpoint: Amount,
    #[serde(default)]
    pub missing_at_last_checkpoint: Amount,
}

impl RewardsInfo {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Two users with identical positions claimed identical rewards.
pub fn rewards_claimed_equally(first: &Amount, second: &Amount) -> ComparisonResult {
    matchers::bn_equal(first, second, "users with equal stake should claim equal rewards")
}

/// After a claim nothing is left to claim and the claimed total grew by what was available.
pub fn claim_settled(before: &RewardsInfo, after: &RewardsInfo) -> [ComparisonResult; 2] {
    let expected_claimed = &before.rewards_already_claimed + &before.rewards_not_yet_claimed;
    [
        matchers::bn_lte(
            &after.rewards_not_yet_claimed,
            &Amount::zero(),
            "no rewards should remain after claiming",
        ),
        matchers::bn_equal(
            &after.rewards_already_claimed,
            &expected_claimed,
            "claimed rewards should include everything that was available",
        ),
    ]
}

/// Available rewards strictly grew between two reads.
pub fn rewards_accrued(before: &RewardsInfo, after: &RewardsInfo) -> ComparisonResult {
    matchers::bn_gt(
        &after.rewards_not_yet_claimed,
        &before.rewards_not_yet_claimed,
        "rewards should accrue while liquidity is activated",
    )
}
