//! Core library for the curve-trader project.
//!
//! Client-side engine for trading launchpad tokens that start on a bonding
//! curve and graduate to a DEX pool: venue routing, live quotes, slippage
//! bounds, sell-path approvals, and swap submission with a deadline.

pub mod amount;
pub mod chain;
pub mod config;
pub mod errors;
pub mod models;
pub mod trade;
pub mod utils;
