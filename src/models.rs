//! Shared data structures used throughout the application.

use crate::errors::TradeError;
use crate::utils;
use ethers::types::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

/// Trading venue for a token. A token trades on the bonding curve until it
/// graduates, then on the DEX pool; every downstream branch goes through
/// this type instead of re-deriving the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Venue {
    BondingCurve,
    Dex,
}

/// Side of a trade. For buys the input is the chain's native asset, for
/// sells it is the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

/// Expected output for a fixed input, read live from the venue. Produced
/// fresh for every attempt and consumed immediately; never cached across
/// blocks.
#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub output: U256,
    pub fee: U256,
    pub venue: Venue,
}

impl Quote {
    pub fn zero(venue: Venue) -> Self {
        Self {
            output: U256::zero(),
            fee: U256::zero(),
            venue,
        }
    }
}

/// A caller's request for one trade attempt. Immutable once handed to the
/// executor.
#[derive(Debug, Clone, Copy)]
pub struct TradeIntent {
    pub token: Address,
    pub direction: Direction,
    /// Base units of the input asset (native for buys, token for sells).
    pub amount_in: U256,
    pub slippage_bps: u32,
    /// Absolute Unix timestamp after which the venue contract must reject
    /// the swap.
    pub deadline: u64,
}

impl TradeIntent {
    /// Build an intent whose deadline is `window_secs` from now.
    pub fn with_window(
        token: Address,
        direction: Direction,
        amount_in: U256,
        slippage_bps: u32,
        window_secs: u64,
    ) -> Self {
        Self {
            token,
            direction,
            amount_in,
            slippage_bps,
            deadline: utils::unix_now() + window_secs,
        }
    }
}

/// Terminal state of a successful attempt. The swap is submitted but not
/// yet mined; receipt polling is the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct TradeOutcome {
    pub tx_hash: TxHash,
    pub expected_output: U256,
    pub venue: Venue,
}

/// Lifecycle status mirrored by the external trade-history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    Pending,
    Executing,
    Success,
    Failed,
    Cancelled,
}

/// Write-behind record emitted to the persistence collaborator. Carries
/// everything that layer needs to key a Trade row; emission never blocks
/// or fails the trade itself.
#[derive(Debug, Clone, Serialize)]
pub struct TradeRecord {
    pub token: Address,
    pub direction: Direction,
    pub amount_in: U256,
    pub expected_output: Option<U256>,
    pub venue: Option<Venue>,
    pub status: TradeStatus,
    pub tx_hash: Option<TxHash>,
    pub failure_reason: Option<String>,
    pub timestamp: u64,
}

impl TradeRecord {
    pub fn pending(intent: &TradeIntent) -> Self {
        Self {
            token: intent.token,
            direction: intent.direction,
            amount_in: intent.amount_in,
            expected_output: None,
            venue: None,
            status: TradeStatus::Pending,
            tx_hash: None,
            failure_reason: None,
            timestamp: utils::unix_now(),
        }
    }

    pub fn success(intent: &TradeIntent, outcome: &TradeOutcome) -> Self {
        Self {
            expected_output: Some(outcome.expected_output),
            venue: Some(outcome.venue),
            status: TradeStatus::Success,
            tx_hash: Some(outcome.tx_hash),
            ..Self::pending(intent)
        }
    }

    pub fn failed(intent: &TradeIntent, error: &TradeError) -> Self {
        Self {
            status: TradeStatus::Failed,
            failure_reason: Some(error.reason_code().to_string()),
            ..Self::pending(intent)
        }
    }
}

/// Raw bonding-curve reserve snapshot (`curves(token)`), for display and
/// analytics; the trade flow itself never consults it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurveState {
    pub real_reserve: U256,
    pub virtual_reserve: U256,
    pub k: U256,
    pub real_token_supply: U256,
    pub virtual_token_supply: U256,
    pub graduated: bool,
}

/// Progress toward graduation, as reported by the lens helper.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GraduationProgress {
    pub progress_bps: U256,
    pub current_market_cap: U256,
    pub graduation_market_cap: U256,
}
