//! Venue selection for a token.

use crate::chain::VenueSource;
use crate::errors::Result;
use crate::models::Venue;
use ethers::types::Address;
use std::sync::Arc;
use tracing::debug;

/// Resolves which router a token's trades must target.
///
/// Graduation is an irreversible one-time transition triggered externally,
/// and a stale "not graduated" answer would route a trade to a venue with
/// no liquidity, so resolution happens fresh immediately before every
/// trade and is never cached.
pub struct VenueResolver<S> {
    source: Arc<S>,
}

impl<S: VenueSource> VenueResolver<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Live `isGraduated` read. A read failure aborts the trade rather
    /// than guessing a venue.
    pub async fn resolve(&self, token: Address) -> Result<Venue> {
        let venue = if self.source.is_graduated(token).await? {
            Venue::Dex
        } else {
            Venue::BondingCurve
        };
        debug!(?token, ?venue, "[VENUE] resolved");
        Ok(venue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TradeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FlagSource {
        graduated: AtomicBool,
        fail: bool,
    }

    #[async_trait]
    impl VenueSource for FlagSource {
        async fn is_graduated(&self, _token: Address) -> Result<bool> {
            if self.fail {
                return Err(TradeError::VenueResolution("read failed".into()));
            }
            Ok(self.graduated.load(Ordering::SeqCst))
        }
    }

    #[tokio::test]
    async fn routes_by_graduation_flag() {
        let source = Arc::new(FlagSource {
            graduated: AtomicBool::new(false),
            fail: false,
        });
        let resolver = VenueResolver::new(source.clone());
        let token = Address::repeat_byte(7);

        assert_eq!(resolver.resolve(token).await.unwrap(), Venue::BondingCurve);
        // same token, no graduation event: same answer
        assert_eq!(resolver.resolve(token).await.unwrap(), Venue::BondingCurve);

        source.graduated.store(true, Ordering::SeqCst);
        assert_eq!(resolver.resolve(token).await.unwrap(), Venue::Dex);
    }

    #[tokio::test]
    async fn read_failure_propagates() {
        let resolver = VenueResolver::new(Arc::new(FlagSource {
            graduated: AtomicBool::new(false),
            fail: true,
        }));
        let err = resolver.resolve(Address::repeat_byte(7)).await.unwrap_err();
        assert!(matches!(err, TradeError::VenueResolution(_)));
    }
}
