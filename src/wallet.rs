//! Before/after balance tracking for a test account.
//!
//! A test registers the currencies it cares about, records a snapshot of each
//! balance before the extrinsic and another one after, then asserts over the
//! per-field differences with the big-number matchers.

use crate::amount::Amount;
use crate::error::{BnAssertError, Result};
use crate::matchers::{self, ComparisonResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Balance of one currency on one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTokenBalance")]
pub struct TokenBalance {
    pub free: Amount,
    pub reserved: Amount,
    pub frozen: Amount,
}

/// Chain encoding; older runtimes split `frozen` into misc and fee parts.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTokenBalance {
    #[serde(default)]
    free: Amount,
    #[serde(default)]
    reserved: Amount,
    #[serde(default)]
    frozen: Option<Amount>,
    #[serde(default)]
    misc_frozen: Option<Amount>,
    #[serde(default)]
    fee_frozen: Option<Amount>,
}

impl From<RawTokenBalance> for TokenBalance {
    fn from(raw: RawTokenBalance) -> Self {
        let frozen = match raw.frozen {
            Some(frozen) => frozen,
            None => {
                raw.misc_frozen.unwrap_or_default() + raw.fee_frozen.unwrap_or_default()
            }
        };
        TokenBalance {
            free: raw.free,
            reserved: raw.reserved,
            frozen,
        }
    }
}

impl TokenBalance {
    pub fn new(free: Amount, reserved: Amount, frozen: Amount) -> Self {
        Self {
            free,
            reserved,
            frozen,
        }
    }

    /// A balance holding only free tokens.
    pub fn free(free: Amount) -> Self {
        Self {
            free,
            ..Self::default()
        }
    }

    /// Parses the chain JSON for a `tokens.accounts` entry.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Field-wise `self - earlier`.
    pub fn delta_since(&self, earlier: &TokenBalance) -> TokenBalance {
        TokenBalance {
            free: &self.free - &earlier.free,
            reserved: &self.reserved - &earlier.reserved,
            frozen: &self.frozen - &earlier.frozen,
        }
    }
}

/// Which snapshot a refresh writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletPhase {
    Before,
    After,
}

/// A tracked currency with its two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedAsset {
    pub currency_id: u32,
    pub amount_before: TokenBalance,
    pub amount_after: TokenBalance,
}

/// Change of one currency between the two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceDiff {
    pub currency_id: u32,
    pub diff: TokenBalance,
}

/// Balances of one test account, in the order currencies were added.
#[derive(Debug, Clone, Default)]
pub struct UserWallet {
    assets: Vec<TrackedAsset>,
}

impl UserWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a currency; adding it twice is a no-op.
    pub fn add_asset(&mut self, currency_id: u32) {
        if self.asset(currency_id).is_none() {
            self.assets.push(TrackedAsset {
                currency_id,
                amount_before: TokenBalance::default(),
                amount_after: TokenBalance::default(),
            });
        }
    }

    pub fn add_assets(&mut self, currency_ids: impl IntoIterator<Item = u32>) {
        for id in currency_ids {
            self.add_asset(id);
        }
    }

    pub fn asset(&self, currency_id: u32) -> Option<&TrackedAsset> {
        self.assets.iter().find(|a| a.currency_id == currency_id)
    }

    pub fn assets(&self) -> &[TrackedAsset] {
        &self.assets
    }

    fn asset_mut(&mut self, currency_id: u32) -> Result<&mut TrackedAsset> {
        self.assets
            .iter_mut()
            .find(|a| a.currency_id == currency_id)
            .ok_or(BnAssertError::MissingAsset { currency_id })
    }

    fn tracked(&self, currency_id: u32) -> Result<&TrackedAsset> {
        self.asset(currency_id)
            .ok_or(BnAssertError::MissingAsset { currency_id })
    }

    /// Stores one balance into the given snapshot.
    pub fn record(&mut self, phase: WalletPhase, currency_id: u32, balance: TokenBalance) -> Result<()> {
        let asset = self.asset_mut(currency_id)?;
        match phase {
            WalletPhase::Before => asset.amount_before = balance,
            WalletPhase::After => asset.amount_after = balance,
        }
        Ok(())
    }

    /// Stores a full snapshot. Tracked currencies absent from `balances` read as zero,
    /// matching the chain, which omits empty accounts.
    pub fn refresh(&mut self, phase: WalletPhase, balances: &BTreeMap<u32, TokenBalance>) {
        for asset in &mut self.assets {
            let balance = balances
                .get(&asset.currency_id)
                .cloned()
                .unwrap_or_default();
            match phase {
                WalletPhase::Before => asset.amount_before = balance,
                WalletPhase::After => asset.amount_after = balance,
            }
        }
    }

    /// After-minus-before for every tracked currency.
    pub fn wallet_differences(&self) -> Vec<BalanceDiff> {
        self.assets
            .iter()
            .map(|a| BalanceDiff {
                currency_id: a.currency_id,
                diff: a.amount_after.delta_since(&a.amount_before),
            })
            .collect()
    }

    /// Free balance dropped by exactly `amount`.
    pub fn validate_wallet_reduced(&self, currency_id: u32, amount: &Amount) -> Result<ComparisonResult> {
        let asset = self.tracked(currency_id)?;
        let expected = &asset.amount_before.free - amount;
        Ok(matchers::bn_equal(
            &asset.amount_after.free,
            &expected,
            &format!("currency {} should be reduced by {}", currency_id, amount),
        ))
    }

    /// Free balance grew by exactly `amount`.
    pub fn validate_wallet_increased(&self, currency_id: u32, amount: &Amount) -> Result<ComparisonResult> {
        let asset = self.tracked(currency_id)?;
        let expected = &asset.amount_before.free + amount;
        Ok(matchers::bn_equal(
            &asset.amount_after.free,
            &expected,
            &format!("currency {} should be increased by {}", currency_id, amount),
        ))
    }

    /// One result per tracked currency and balance field.
    pub fn validate_wallets_unmodified(&self) -> Vec<ComparisonResult> {
        self.assets
            .iter()
            .flat_map(|a| {
                let before = &a.amount_before;
                let after = &a.amount_after;
                [
                    ("free", &after.free, &before.free),
                    ("reserved", &after.reserved, &before.reserved),
                    ("frozen", &after.frozen, &before.frozen),
                ]
                .into_iter()
                .map(move |(field, after, before)| {
                    matchers::bn_equal(
                        after,
                        before,
                        &format!("currency {} {} changed", a.currency_id, field),
                    )
                })
            })
            .collect()
    }
}
