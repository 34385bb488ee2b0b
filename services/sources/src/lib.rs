//! # Quote Sources - Price-Source Adapter Service
//!
//! ## Purpose
//!
//! Normalizes wildly different external pricing mechanisms behind one
//! uniform contract: `quote(token_in, amount_in, token_out) -> amount_out`.
//! Each adapter is bound at construction to exactly one upstream endpoint
//! (a pool factory, an observation oracle, a price feed, an aggregator, a
//! swap quoter) plus optional fixed parameters, and is immutable afterwards.
//! All calls are read-only against the upstream and stateless between
//! invocations; every answer reflects current upstream state.
//!
//! ## Integration Points
//!
//! - **Input Sources**: upstream readers (traits in [`upstream`]) supplied by
//!   the embedding application; mock implementations live in [`mocks`]
//! - **Output Destinations**: the router in `quote-router`, which resolves
//!   exactly one adapter per query and returns its answer unmodified
//! - **Math**: all fixed-point arithmetic delegates to `quoter-amm`
//! - **Errors**: every adapter failure maps onto [`types::QuoteError`] and
//!   propagates synchronously; nothing is retried or recovered here
//!
//! ## Adapter Catalog
//!
//! | Adapter | Upstream mechanism |
//! |---|---|
//! | [`ConstantProductPool`] | V2-style pool reserves, x*y=k with proportional fee |
//! | [`TimeWeightedPool`] | V3-style tick-cumulative observations over a fixed window |
//! | [`OracleFeed`] | push-based price feed with its own reporting precision |
//! | [`AggregatorQuote`] | external quote-aggregation endpoint |
//! | [`ExternalQuoterCall`] | swap simulation against an external quoter |
//! | [`StableSwapQuote`] | stable-swap estimator endpoint |

pub mod adapters;
pub mod mocks;
pub mod source;
pub mod upstream;

pub use adapters::{
    AggregatorQuote, ConstantProductPool, ExternalQuoterCall, OracleFeed, StableSwapQuote,
    TimeWeightedPool,
};
pub use source::{QuoteSource, SourceHandle, SourceKind};
pub use upstream::{
    AggregatorCaller, ObservationReader, PriceFeedReader, ReserveReader, SwapEstimator,
    SwapSimulator, TokenInfoReader,
};

/// Result type alias for quote operations.
pub type Result<T> = std::result::Result<T, types::QuoteError>;
