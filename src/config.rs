//! Configuration loader and application settings.

use crate::errors::{Result, TradeError};
use ethers::types::Address;
use url::Url;

/// Consolidated application configuration, loaded from environment
/// variables (a `.env` file is picked up by the binary via `dotenvy`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// RPC endpoint for the EVM node.
    pub rpc_url: String,
    /// Hex private key of the trading wallet.
    pub private_key: String,
    /// Bonding-curve state contract (graduation flag, reserves).
    pub curve_address: Address,
    /// Router for pre-graduation trades.
    pub curve_router_address: Address,
    /// Router for post-graduation trades.
    pub dex_router_address: Address,
    /// Read-only lens helper (graduation progress).
    pub lens_address: Address,
    /// Default slippage tolerance in basis points.
    pub default_slippage_bps: u32,
    /// Swap deadline window in seconds.
    pub deadline_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let rpc_url = require("RPC_URL")?;
        // Fail early on an endpoint the provider would choke on later.
        Url::parse(&rpc_url)?;

        Ok(Self {
            rpc_url,
            private_key: require("PRIVATE_KEY")?,
            curve_address: require_address("CURVE_ADDRESS")?,
            curve_router_address: require_address("CURVE_ROUTER_ADDRESS")?,
            dex_router_address: require_address("DEX_ROUTER_ADDRESS")?,
            lens_address: require_address("LENS_ADDRESS")?,
            default_slippage_bps: parse_or("DEFAULT_SLIPPAGE_BPS", 100),
            deadline_secs: parse_or("DEADLINE_SECS", 300),
        })
    }
}

fn require(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| TradeError::Config(format!("set {key} env var")))
}

fn require_address(key: &str) -> Result<Address> {
    require(key)?
        .parse()
        .map_err(|e| TradeError::Config(format!("{key} is not a valid address: {e}")))
}

fn parse_or<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
