use anyhow::Result;
use curve_trader::{
    amount::{format_base_units, parse_base_units},
    chain::{ChainClient, CurveAnalytics},
    config::AppConfig,
    models::{Direction, TradeIntent},
    trade::{BalanceReader, TradeExecutor},
    utils,
};
use ethers::types::Address;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load()?;

    // Trade parameters
    let token: Address = std::env::var("TOKEN_ADDRESS")
        .expect("Set TOKEN_ADDRESS env var to the token to trade")
        .parse()?;
    let direction = match std::env::var("DIRECTION")
        .unwrap_or_else(|_| "buy".into())
        .to_lowercase()
        .as_str()
    {
        "sell" => Direction::Sell,
        _ => Direction::Buy,
    };
    let amount_in = parse_base_units(
        &std::env::var("AMOUNT").expect("Set AMOUNT env var to the input amount, e.g. 0.1"),
    )?;
    let slippage_bps: u32 = std::env::var("SLIPPAGE_BPS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(config.default_slippage_bps);

    tracing::info!(?token, ?direction, slippage_bps, "[INIT] curve-trader starting");

    let client = Arc::new(ChainClient::connect(&config).await?);
    let owner = client.owner();

    // Pre-trade context: holdings and graduation progress are independent
    // reads, fetched concurrently. These inform the caller; the executor
    // re-resolves everything it acts on.
    let balances = BalanceReader::new(client.clone());
    let (native, held, progress) = futures::try_join!(
        balances.get_native_balance(owner),
        balances.get_balance(token, owner),
        client.progress(token),
    )?;
    tracing::info!(
        native = %format_base_units(native),
        token = %format_base_units(held),
        progress_bps = %progress.progress_bps,
        "[INIT] wallet and curve state"
    );

    // Write-behind trade history: drain records to the log; a persistence
    // layer would subscribe here instead.
    let (record_tx, mut record_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(record) = record_rx.recv().await {
            match serde_json::to_string(&record) {
                Ok(json) => tracing::info!(record = %json, "[HISTORY] trade record"),
                Err(e) => tracing::warn!(error = %e, "[HISTORY] record serialization failed"),
            }
        }
    });

    let executor = TradeExecutor::new(client.clone(), owner).with_record_sink(record_tx);
    let intent = TradeIntent::with_window(
        token,
        direction,
        amount_in,
        slippage_bps,
        config.deadline_secs,
    );

    let outcome = executor.execute(intent).await?;
    tracing::info!(
        tx = ?outcome.tx_hash,
        venue = ?outcome.venue,
        expected_output = %format_base_units(outcome.expected_output),
        "[TRADE] submitted, waiting for confirmation"
    );

    let receipt = client.await_receipt(outcome.tx_hash).await?;
    tracing::info!(
        block = ?receipt.block_number,
        gas_used = ?receipt.gas_used,
        "[TRADE] confirmed"
    );

    Ok(())
}
