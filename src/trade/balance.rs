//! Wallet balance reads.

use crate::chain::TokenState;
use crate::errors::Result;
use ethers::types::{Address, U256};
use std::sync::Arc;

/// Live token and native-asset holdings for a wallet, used to populate
/// "max amount" affordances and to validate sell sizes before a trade.
pub struct BalanceReader<S> {
    source: Arc<S>,
}

impl<S: TokenState> BalanceReader<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Token holding of `owner`. Unset token or owner yields zero (not an
    /// error) so eagerly-polling callers need no special casing; a failed
    /// read on set inputs still propagates.
    pub async fn get_balance(&self, token: Address, owner: Address) -> Result<U256> {
        if token.is_zero() || owner.is_zero() {
            return Ok(U256::zero());
        }
        self.source.balance_of(token, owner).await
    }

    /// Native-asset holding, the spend side of a buy.
    pub async fn get_native_balance(&self, owner: Address) -> Result<U256> {
        if owner.is_zero() {
            return Ok(U256::zero());
        }
        self.source.native_balance(owner).await
    }
}
