//! Sell-path allowance management.

use crate::chain::{Approver, TokenState};
use crate::errors::Result;
use ethers::types::{Address, U256};
use std::sync::Arc;
use tracing::{debug, info};

/// Ensures the venue router may spend the token before a sell is
/// submitted. Allowance is shared on-chain state mutable by anything
/// holding the key, so it is re-read on every sell rather than trusted
/// from a cache.
pub struct AllowanceGuard<S> {
    source: Arc<S>,
}

impl<S: TokenState + Approver> AllowanceGuard<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Returns once `spender` is authorized for at least `required`.
    ///
    /// If the live allowance already covers the amount, no transaction is
    /// submitted. Otherwise an approval is sent and this does not return
    /// until it is confirmed on chain. The `bool` reports whether an
    /// approval was submitted.
    pub async fn ensure_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        required: U256,
    ) -> Result<bool> {
        let current = self.source.allowance(token, owner, spender).await?;
        if current >= required {
            debug!(?token, %current, %required, "[APPROVE] allowance sufficient");
            return Ok(false);
        }

        info!(?token, ?spender, %current, %required, "[APPROVE] allowance short, approving");
        let tx_hash = self
            .source
            .approve_confirmed(token, spender, required)
            .await?;
        info!(?tx_hash, "[APPROVE] approval confirmed");
        Ok(true)
    }
}
