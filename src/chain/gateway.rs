//! Narrow async seams between the trading components and the chain.
//!
//! Each trait covers one concern so tests can stand in for exactly the
//! reads and writes a component performs. `ChainClient` implements all of
//! them against the live contracts.

use crate::errors::Result;
use crate::models::{CurveState, GraduationProgress, Venue};
use async_trait::async_trait;
use ethers::types::{Address, TxHash, U256};

/// Graduation-state reads backing venue resolution.
#[async_trait]
pub trait VenueSource: Send + Sync {
    async fn is_graduated(&self, token: Address) -> Result<bool>;
}

/// Venue-aware quote reads.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// `(amount_out, fee)` for swapping `amount_in` on `venue`, read from
    /// the router's view function.
    async fn amount_out_with_fee(
        &self,
        venue: Venue,
        token: Address,
        amount_in: U256,
        is_buy: bool,
    ) -> Result<(U256, U256)>;
}

/// Live token and native-asset state. Shared on-chain state, so always
/// re-read, never cached across attempts.
#[async_trait]
pub trait TokenState: Send + Sync {
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256>;
    async fn native_balance(&self, owner: Address) -> Result<U256>;
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256>;
}

/// Approval submission that returns only once the approval is mined.
#[async_trait]
pub trait Approver: Send + Sync {
    async fn approve_confirmed(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash>;
}

/// Swap submission against whichever router the venue selects. Returns the
/// transaction hash as soon as the wallet accepts the call; mining is the
/// caller's concern.
#[async_trait]
pub trait SwapRouter: Send + Sync {
    fn router_address(&self, venue: Venue) -> Address;

    async fn submit_buy(
        &self,
        venue: Venue,
        token: Address,
        amount_in: U256,
        min_out: U256,
        recipient: Address,
        deadline: U256,
    ) -> Result<TxHash>;

    async fn submit_sell(
        &self,
        venue: Venue,
        token: Address,
        amount_in: U256,
        min_out: U256,
        recipient: Address,
        deadline: U256,
    ) -> Result<TxHash>;
}

/// Display-oriented curve reads (reserves, graduation progress). Consulted
/// by callers, never by the trade flow itself.
#[async_trait]
pub trait CurveAnalytics: Send + Sync {
    async fn curve_state(&self, token: Address) -> Result<CurveState>;
    async fn progress(&self, token: Address) -> Result<GraduationProgress>;
}

/// Everything the trade executor needs from the chain.
pub trait ChainGateway: VenueSource + QuoteSource + TokenState + Approver + SwapRouter {}

impl<T> ChainGateway for T where T: VenueSource + QuoteSource + TokenState + Approver + SwapRouter {}
