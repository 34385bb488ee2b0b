//! Upstream collaborator contracts
//!
//! The core consumes these capabilities but does not implement them: each
//! trait is the boundary to one external read-only mechanism (a pool's
//! reserve getter, an observation oracle, a feed, an aggregator, a swap
//! quoter). Network transport and endpoint wiring live entirely on the
//! implementor's side of the boundary. Reads are synchronous and blocking;
//! implementations report failures through [`types::QuoteError`] — typically
//! the domain variant when they can classify the failure (`PairNotFound`,
//! `InsufficientObservations`, `InvalidPriceData`) and `Upstream` otherwise.

use ethers_core::types::I256;
use types::{Amount, TokenId};

use crate::Result;

/// Reads current reserves of a V2-style constant-product pool.
pub trait ReserveReader: Send + Sync {
    /// Reserves for the canonically sorted pair `(token0, token1)`, in that
    /// order. `PairNotFound` when the factory has no pool for the pair.
    fn reserves(&self, token0: TokenId, token1: TokenId) -> Result<(Amount, Amount)>;
}

/// Reads tick-cumulative observations from a V3-style pool oracle.
pub trait ObservationReader: Send + Sync {
    /// Tick cumulatives for the sorted pair at each requested lookback, in
    /// seconds before now. `InsufficientObservations` when the pool's
    /// history does not reach the oldest requested point.
    fn tick_cumulatives(
        &self,
        token0: TokenId,
        token1: TokenId,
        seconds_agos: &[u32],
    ) -> Result<Vec<i64>>;
}

/// Reads the latest answer from a push-based price feed.
pub trait PriceFeedReader: Send + Sync {
    /// Most recent reported price, in the feed's own precision. A feed that
    /// knows its data is stale reports `InvalidPriceData` instead of a value.
    fn latest_answer(&self) -> Result<I256>;

    /// Number of decimals in the feed's reported prices.
    fn decimals(&self) -> u8;
}

/// Reads ERC-20 metadata needed to rescale between token precisions.
pub trait TokenInfoReader: Send + Sync {
    fn decimals(&self, token: TokenId) -> Result<u8>;
}

/// Calls an external quote-aggregation endpoint.
pub trait AggregatorCaller: Send + Sync {
    /// Best amount the aggregator expects for the trade, across whatever
    /// routes it internally considers.
    fn expected_return(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        amount_in: Amount,
    ) -> Result<Amount>;
}

/// Simulates a single-pool swap against an external quoting endpoint.
pub trait SwapSimulator: Send + Sync {
    /// Output of an exact-input single-hop swap at the given fee tier,
    /// bounded by `sqrt_price_limit` (zero meaning unbounded).
    fn quote_exact_input_single(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        fee: u32,
        amount_in: Amount,
        sqrt_price_limit: Amount,
    ) -> Result<Amount>;
}

/// Estimates a swap through a stable-swap venue.
pub trait SwapEstimator: Send + Sync {
    fn estimated_swap_amount(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        amount_in: Amount,
    ) -> Result<Amount>;
}
