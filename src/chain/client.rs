use crate::chain::bindings::{BondingCurve, BondingCurveRouter, CurveLens, DexRouter, Erc20};
use crate::chain::gateway::{Approver, CurveAnalytics, QuoteSource, SwapRouter, TokenState, VenueSource};
use crate::config::AppConfig;
use crate::errors::{Result, SubmissionError, TradeError, classify_submission_error};
use crate::models::{CurveState, GraduationProgress, Venue};
use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, PendingTransaction, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, TransactionReceipt, TxHash, U64, U256};
use std::sync::Arc;
use tracing::info;

type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

#[derive(Debug, Clone, Copy)]
struct ContractAddresses {
    curve: Address,
    curve_router: Address,
    dex_router: Address,
    lens: Address,
}

/// Live handle to the deployed contracts: read-only calls go through the
/// bare provider, swap and approval writes through the signing middleware.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<Provider<Http>>,
    signer: Arc<SignerClient>,
    owner: Address,
    addresses: ContractAddresses,
}

impl ChainClient {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())?;
        // doubles as a connectivity sanity check
        let chain_id = provider.get_chainid().await?;

        let wallet: LocalWallet = config.private_key.parse::<LocalWallet>()?;
        let wallet = wallet.with_chain_id(chain_id.as_u64());
        let owner = wallet.address();
        let signer = Arc::new(SignerMiddleware::new(provider.clone(), wallet));

        info!(chain_id = %chain_id, wallet = ?owner, "[INIT] chain client connected");

        Ok(Self {
            provider: Arc::new(provider),
            signer,
            owner,
            addresses: ContractAddresses {
                curve: config.curve_address,
                curve_router: config.curve_router_address,
                dex_router: config.dex_router_address,
                lens: config.lens_address,
            },
        })
    }

    /// The trading wallet's address, used as swap recipient and allowance
    /// owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Block until the swap submitted as `tx_hash` is mined, surfacing a
    /// revert as a typed failure. Kept separate from submission so callers
    /// decide when (and whether) to block on it.
    pub async fn await_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt> {
        let receipt = PendingTransaction::new(tx_hash, self.provider.as_ref())
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?
            .ok_or_else(|| {
                SubmissionError::Network("transaction dropped without a receipt".into())
            })?;
        if receipt.status != Some(U64::from(1)) {
            return Err(SubmissionError::Reverted.into());
        }
        Ok(receipt)
    }

    fn curve(&self) -> BondingCurve<Provider<Http>> {
        BondingCurve::new(self.addresses.curve, self.provider.clone())
    }

    fn lens(&self) -> CurveLens<Provider<Http>> {
        CurveLens::new(self.addresses.lens, self.provider.clone())
    }

    fn erc20(&self, token: Address) -> Erc20<Provider<Http>> {
        Erc20::new(token, self.provider.clone())
    }

    fn erc20_signed(&self, token: Address) -> Erc20<SignerClient> {
        Erc20::new(token, self.signer.clone())
    }

    fn curve_router(&self) -> BondingCurveRouter<SignerClient> {
        BondingCurveRouter::new(self.addresses.curve_router, self.signer.clone())
    }

    fn dex_router(&self) -> DexRouter<SignerClient> {
        DexRouter::new(self.addresses.dex_router, self.signer.clone())
    }
}

#[async_trait]
impl VenueSource for ChainClient {
    async fn is_graduated(&self, token: Address) -> Result<bool> {
        self.curve()
            .is_graduated(token)
            .call()
            .await
            .map_err(|e| TradeError::VenueResolution(e.to_string()))
    }
}

#[async_trait]
impl QuoteSource for ChainClient {
    async fn amount_out_with_fee(
        &self,
        venue: Venue,
        token: Address,
        amount_in: U256,
        is_buy: bool,
    ) -> Result<(U256, U256)> {
        match venue {
            Venue::BondingCurve => self
                .curve_router()
                .get_amount_out_with_fee(token, amount_in, is_buy)
                .call()
                .await
                .map_err(|e| TradeError::Quote(e.to_string())),
            Venue::Dex => self
                .dex_router()
                .get_amount_out_with_fee(token, amount_in, is_buy)
                .call()
                .await
                .map_err(|e| TradeError::Quote(e.to_string())),
        }
    }
}

#[async_trait]
impl TokenState for ChainClient {
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        self.erc20(token)
            .balance_of(owner)
            .call()
            .await
            .map_err(|e| TradeError::Read(e.to_string()))
    }

    async fn native_balance(&self, owner: Address) -> Result<U256> {
        Ok(self.provider.get_balance(owner, None).await?)
    }

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        self.erc20(token)
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| TradeError::Approval(e.to_string()))
    }
}

#[async_trait]
impl Approver for ChainClient {
    async fn approve_confirmed(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let call = self.erc20_signed(token).approve(spender, amount);
        let pending = call
            .send()
            .await
            .map_err(|e| TradeError::Approval(e.to_string()))?;
        info!(tx = ?pending.tx_hash(), "[APPROVE] approval submitted, waiting for receipt");

        // Submitting the swap against an unconfirmed approval is a race
        // that reverts the swap, so block on the receipt here.
        let receipt = pending
            .await
            .map_err(|e| TradeError::Approval(e.to_string()))?
            .ok_or_else(|| TradeError::Approval("approval dropped without a receipt".into()))?;
        if receipt.status != Some(U64::from(1)) {
            return Err(TradeError::Approval("approval transaction reverted".into()));
        }
        Ok(receipt.transaction_hash)
    }
}

#[async_trait]
impl SwapRouter for ChainClient {
    fn router_address(&self, venue: Venue) -> Address {
        match venue {
            Venue::BondingCurve => self.addresses.curve_router,
            Venue::Dex => self.addresses.dex_router,
        }
    }

    async fn submit_buy(
        &self,
        venue: Venue,
        token: Address,
        amount_in: U256,
        min_out: U256,
        recipient: Address,
        deadline: U256,
    ) -> Result<TxHash> {
        let pending_hash = match venue {
            Venue::BondingCurve => {
                let call = self
                    .curve_router()
                    .buy(token, min_out, recipient, deadline)
                    .value(amount_in);
                let pending = call
                    .send()
                    .await
                    .map_err(|e| classify_submission_error(&e.to_string()))?;
                pending.tx_hash()
            }
            Venue::Dex => {
                let call = self
                    .dex_router()
                    .buy(token, min_out, recipient, deadline)
                    .value(amount_in);
                let pending = call
                    .send()
                    .await
                    .map_err(|e| classify_submission_error(&e.to_string()))?;
                pending.tx_hash()
            }
        };
        Ok(pending_hash)
    }

    async fn submit_sell(
        &self,
        venue: Venue,
        token: Address,
        amount_in: U256,
        min_out: U256,
        recipient: Address,
        deadline: U256,
    ) -> Result<TxHash> {
        let pending_hash = match venue {
            Venue::BondingCurve => {
                let call = self
                    .curve_router()
                    .sell(token, amount_in, min_out, recipient, deadline);
                let pending = call
                    .send()
                    .await
                    .map_err(|e| classify_submission_error(&e.to_string()))?;
                pending.tx_hash()
            }
            Venue::Dex => {
                let call = self
                    .dex_router()
                    .sell(token, amount_in, min_out, recipient, deadline);
                let pending = call
                    .send()
                    .await
                    .map_err(|e| classify_submission_error(&e.to_string()))?;
                pending.tx_hash()
            }
        };
        Ok(pending_hash)
    }
}

#[async_trait]
impl CurveAnalytics for ChainClient {
    async fn curve_state(&self, token: Address) -> Result<CurveState> {
        let (real_reserve, virtual_reserve, k, real_token_supply, virtual_token_supply, graduated) =
            self.curve()
                .curves(token)
                .call()
                .await
                .map_err(|e| TradeError::Read(e.to_string()))?;
        Ok(CurveState {
            real_reserve,
            virtual_reserve,
            k,
            real_token_supply,
            virtual_token_supply,
            graduated,
        })
    }

    async fn progress(&self, token: Address) -> Result<GraduationProgress> {
        let (progress_bps, current_market_cap, graduation_market_cap) = self
            .lens()
            .get_progress(token)
            .call()
            .await
            .map_err(|e| TradeError::Read(e.to_string()))?;
        Ok(GraduationProgress {
            progress_bps,
            current_market_cap,
            graduation_market_cap,
        })
    }
}
