//! The trading components: venue resolution, quoting, slippage bounds,
//! allowance management, balances, and the executor that composes them.

pub mod allowance;
pub mod balance;
pub mod executor;
pub mod quote;
pub mod slippage;
pub mod venue;

pub use allowance::AllowanceGuard;
pub use balance::BalanceReader;
pub use executor::TradeExecutor;
pub use quote::QuoteService;
pub use slippage::min_output;
pub use venue::VenueResolver;
