//! Chain access: contract bindings, the async gateway seams, and the live
//! client that implements them.

pub mod bindings;
pub mod client;
pub mod gateway;

pub use client::ChainClient;
pub use gateway::{
    Approver, ChainGateway, CurveAnalytics, QuoteSource, SwapRouter, TokenState, VenueSource,
};
