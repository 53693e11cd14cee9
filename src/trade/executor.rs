//! Trade orchestration.
//!
//! One `execute` call runs the whole flow for a single attempt:
//! resolve venue → quote → slippage bound → (sell only: ensure allowance)
//! → submit swap. The steps are strictly ordered because each result feeds
//! the next, and any stage failure aborts the rest; callers retry by
//! re-invoking the whole flow so nothing stale is reused. Dropping the
//! returned future before submission cancels the attempt without side
//! effects.

use crate::chain::ChainGateway;
use crate::errors::{Result, TradeError};
use crate::models::{Direction, TradeIntent, TradeOutcome, TradeRecord};
use crate::trade::allowance::AllowanceGuard;
use crate::trade::quote::QuoteService;
use crate::trade::slippage::min_output;
use crate::trade::venue::VenueResolver;
use ethers::types::{Address, U256};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Composes the trading components over one chain gateway. Holds no
/// per-trade state, so concurrent attempts on one executor are safe.
pub struct TradeExecutor<G> {
    gateway: Arc<G>,
    /// Swap recipient and allowance owner: the trading wallet.
    owner: Address,
    /// Write-behind sink for the trade-history collaborator.
    record_sink: Option<mpsc::UnboundedSender<TradeRecord>>,
}

impl<G: ChainGateway> TradeExecutor<G> {
    pub fn new(gateway: Arc<G>, owner: Address) -> Self {
        Self {
            gateway,
            owner,
            record_sink: None,
        }
    }

    /// Attach a sink for trade records. Emission is fire-and-forget; a
    /// closed receiver never fails a trade.
    pub fn with_record_sink(mut self, sink: mpsc::UnboundedSender<TradeRecord>) -> Self {
        self.record_sink = Some(sink);
        self
    }

    /// Run one trade attempt to its terminal state.
    ///
    /// On success the swap transaction has been accepted by the wallet and
    /// handed to the network; it is not yet mined. The on-chain deadline
    /// bounds its exposure from there, and receipt polling is a separate
    /// caller concern.
    pub async fn execute(&self, intent: TradeIntent) -> Result<TradeOutcome> {
        if let Err(error) = self.validate(&intent) {
            self.emit(TradeRecord::failed(&intent, &error));
            return Err(error);
        }
        self.emit(TradeRecord::pending(&intent));

        let result = self.run(&intent).await;
        match &result {
            Ok(outcome) => {
                info!(
                    tx = ?outcome.tx_hash,
                    venue = ?outcome.venue,
                    expected_output = %outcome.expected_output,
                    "[TRADE] swap submitted"
                );
                self.emit(TradeRecord::success(&intent, outcome));
            }
            Err(error) => {
                warn!(reason = error.reason_code(), %error, "[TRADE] attempt failed");
                self.emit(TradeRecord::failed(&intent, error));
            }
        }
        result
    }

    async fn run(&self, intent: &TradeIntent) -> Result<TradeOutcome> {
        let venue = VenueResolver::new(self.gateway.clone())
            .resolve(intent.token)
            .await?;

        let quote = QuoteService::new(self.gateway.clone())
            .get_quote(venue, intent.token, intent.direction, intent.amount_in)
            .await?;

        let min_out = min_output(quote.output, intent.slippage_bps);

        if intent.direction == Direction::Sell {
            let spender = self.gateway.router_address(venue);
            AllowanceGuard::new(self.gateway.clone())
                .ensure_allowance(intent.token, self.owner, spender, intent.amount_in)
                .await?;
        }

        let deadline = U256::from(intent.deadline);
        let tx_hash = match intent.direction {
            Direction::Buy => {
                self.gateway
                    .submit_buy(
                        venue,
                        intent.token,
                        intent.amount_in,
                        min_out,
                        self.owner,
                        deadline,
                    )
                    .await?
            }
            Direction::Sell => {
                self.gateway
                    .submit_sell(
                        venue,
                        intent.token,
                        intent.amount_in,
                        min_out,
                        self.owner,
                        deadline,
                    )
                    .await?
            }
        };

        Ok(TradeOutcome {
            tx_hash,
            expected_output: quote.output,
            venue,
        })
    }

    fn validate(&self, intent: &TradeIntent) -> Result<()> {
        if intent.token.is_zero() {
            return Err(TradeError::InvalidInput("missing token address".into()));
        }
        if intent.amount_in.is_zero() {
            return Err(TradeError::InvalidInput("zero input amount".into()));
        }
        Ok(())
    }

    fn emit(&self, record: TradeRecord) {
        if let Some(sink) = &self.record_sink {
            let _ = sink.send(record);
        }
    }
}
