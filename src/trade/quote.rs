//! Venue-aware quote reads.

use crate::chain::QuoteSource;
use crate::errors::Result;
use crate::models::{Direction, Quote, Venue};
use ethers::types::{Address, U256};
use std::sync::Arc;
use tracing::debug;

/// Read-only expected-output lookup against the resolved venue's router.
pub struct QuoteService<S> {
    source: Arc<S>,
}

impl<S: QuoteSource> QuoteService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Expected output and fee for `amount_in` on `venue`.
    ///
    /// An unset token or zero input short-circuits to a zero quote without
    /// touching the chain, so eager callers (a user mid-typing) don't emit
    /// spurious reads. A read failure propagates; it is never collapsed
    /// into a synthetic zero quote.
    pub async fn get_quote(
        &self,
        venue: Venue,
        token: Address,
        direction: Direction,
        amount_in: U256,
    ) -> Result<Quote> {
        if token.is_zero() || amount_in.is_zero() {
            return Ok(Quote::zero(venue));
        }

        let is_buy = direction == Direction::Buy;
        let (output, fee) = self
            .source
            .amount_out_with_fee(venue, token, amount_in, is_buy)
            .await?;
        debug!(?token, ?venue, %amount_in, %output, %fee, "[QUOTE] fetched");
        Ok(Quote { output, fee, venue })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TradeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl QuoteSource for CountingSource {
        async fn amount_out_with_fee(
            &self,
            _venue: Venue,
            _token: Address,
            amount_in: U256,
            _is_buy: bool,
        ) -> Result<(U256, U256)> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(TradeError::Quote("router read failed".into()));
            }
            // 1% fee on the way out
            let fee = amount_in / U256::from(100u64);
            Ok((amount_in - fee, fee))
        }
    }

    #[tokio::test]
    async fn zero_amount_short_circuits_without_a_read() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let service = QuoteService::new(source.clone());

        let quote = service
            .get_quote(
                Venue::BondingCurve,
                Address::repeat_byte(1),
                Direction::Buy,
                U256::zero(),
            )
            .await
            .unwrap();
        assert!(quote.output.is_zero());
        assert!(quote.fee.is_zero());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unset_token_short_circuits_without_a_read() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let service = QuoteService::new(source.clone());

        let quote = service
            .get_quote(Venue::Dex, Address::zero(), Direction::Sell, U256::from(5u64))
            .await
            .unwrap();
        assert!(quote.output.is_zero());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn returns_router_output_and_fee() {
        let service = QuoteService::new(Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        }));
        let quote = service
            .get_quote(
                Venue::Dex,
                Address::repeat_byte(2),
                Direction::Sell,
                U256::from(1_000u64),
            )
            .await
            .unwrap();
        assert_eq!(quote.output, U256::from(990u64));
        assert_eq!(quote.fee, U256::from(10u64));
        assert_eq!(quote.venue, Venue::Dex);
    }

    #[tokio::test]
    async fn read_failure_is_not_a_zero_quote() {
        let service = QuoteService::new(Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: true,
        }));
        let err = service
            .get_quote(
                Venue::BondingCurve,
                Address::repeat_byte(2),
                Direction::Buy,
                U256::from(10u64),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TradeError::Quote(_)));
    }
}
