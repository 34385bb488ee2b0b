//! In-memory upstream doubles for tests
//!
//! Each mock implements one upstream reader trait over a plain map, so
//! adapter and router tests can pin upstream state exactly without any
//! transport. Kept in the library (not behind `cfg(test)`) because the
//! cross-crate e2e suite builds on them too.

use std::collections::HashMap;

use ethers_core::types::I256;
use types::{Amount, PairKey, QuoteError, TokenId};

use crate::{
    AggregatorCaller, ObservationReader, PriceFeedReader, QuoteSource, ReserveReader, Result,
    SourceKind, SwapEstimator, SwapSimulator, TokenInfoReader,
};

/// Fixed timestamp the observation mock anchors its cumulatives to.
const OBSERVATION_NOW_SECS: i64 = 1_700_000_000;

/// Reserve reader over a static pool map keyed by sorted pair.
#[derive(Default)]
pub struct MockReserveReader {
    pools: HashMap<PairKey, (Amount, Amount)>,
}

impl MockReserveReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pool. `reserve0`/`reserve1` follow canonical token order
    /// regardless of the argument order given here.
    pub fn with_pool(mut self, a: TokenId, b: TokenId, reserve0: Amount, reserve1: Amount) -> Self {
        self.pools.insert(PairKey::new(a, b), (reserve0, reserve1));
        self
    }
}

impl ReserveReader for MockReserveReader {
    fn reserves(&self, token0: TokenId, token1: TokenId) -> Result<(Amount, Amount)> {
        self.pools
            .get(&PairKey::new(token0, token1))
            .copied()
            .ok_or(QuoteError::PairNotFound)
    }
}

/// Observation reader synthesizing cumulatives from a constant tick.
#[derive(Default)]
pub struct MockObservationReader {
    /// Per pair: (constant tick, seconds of available history).
    pools: HashMap<PairKey, (i32, u32)>,
}

impl MockObservationReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pool whose tick has been `tick` for all of its
    /// `history_secs` of observation history.
    pub fn with_pool_tick(mut self, a: TokenId, b: TokenId, tick: i32, history_secs: u32) -> Self {
        self.pools.insert(PairKey::new(a, b), (tick, history_secs));
        self
    }
}

impl ObservationReader for MockObservationReader {
    fn tick_cumulatives(
        &self,
        token0: TokenId,
        token1: TokenId,
        seconds_agos: &[u32],
    ) -> Result<Vec<i64>> {
        let (tick, history_secs) = self
            .pools
            .get(&PairKey::new(token0, token1))
            .copied()
            .ok_or(QuoteError::PairNotFound)?;
        seconds_agos
            .iter()
            .map(|&ago| {
                if ago > history_secs {
                    return Err(QuoteError::InsufficientObservations);
                }
                Ok((OBSERVATION_NOW_SECS - i64::from(ago)) * i64::from(tick))
            })
            .collect()
    }
}

/// Price feed returning one fixed answer, optionally marked stale.
pub struct MockPriceFeed {
    answer: I256,
    decimals: u8,
    stale: bool,
}

impl MockPriceFeed {
    pub fn new(answer: I256, decimals: u8) -> Self {
        Self {
            answer,
            decimals,
            stale: false,
        }
    }

    /// Make the feed report its data as stale.
    pub fn stale(mut self) -> Self {
        self.stale = true;
        self
    }
}

impl PriceFeedReader for MockPriceFeed {
    fn latest_answer(&self) -> Result<I256> {
        if self.stale {
            return Err(QuoteError::InvalidPriceData);
        }
        Ok(self.answer)
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// Token metadata reader defaulting every token to 18 decimals.
#[derive(Default)]
pub struct MockTokenInfo {
    decimals: HashMap<TokenId, u8>,
}

impl MockTokenInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimals(mut self, token: TokenId, decimals: u8) -> Self {
        self.decimals.insert(token, decimals);
        self
    }
}

impl TokenInfoReader for MockTokenInfo {
    fn decimals(&self, token: TokenId) -> Result<u8> {
        Ok(self.decimals.get(&token).copied().unwrap_or(18))
    }
}

/// Aggregator answering from a static directional route map.
#[derive(Default)]
pub struct MockAggregator {
    routes: HashMap<(TokenId, TokenId), Amount>,
    failing: bool,
}

impl MockAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, token_in: TokenId, token_out: TokenId, amount_out: Amount) -> Self {
        self.routes.insert((token_in, token_out), amount_out);
        self
    }

    /// Make every call fail as an upstream error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

impl AggregatorCaller for MockAggregator {
    fn expected_return(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        _amount_in: Amount,
    ) -> Result<Amount> {
        if self.failing {
            return Err(QuoteError::Upstream("aggregator unavailable".into()));
        }
        self.routes
            .get(&(token_in, token_out))
            .copied()
            .ok_or(QuoteError::NoRouteFound)
    }
}

/// Swap simulator keyed by (token_in, token_out, fee tier).
#[derive(Default)]
pub struct MockSwapSimulator {
    quotes: HashMap<(TokenId, TokenId, u32), Amount>,
    reverting: bool,
}

impl MockSwapSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(
        mut self,
        token_in: TokenId,
        token_out: TokenId,
        fee: u32,
        amount_out: Amount,
    ) -> Self {
        self.quotes.insert((token_in, token_out, fee), amount_out);
        self
    }

    /// Make every simulation revert.
    pub fn reverting(mut self) -> Self {
        self.reverting = true;
        self
    }
}

impl SwapSimulator for MockSwapSimulator {
    fn quote_exact_input_single(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        fee: u32,
        _amount_in: Amount,
        _sqrt_price_limit: Amount,
    ) -> Result<Amount> {
        if self.reverting {
            return Err(QuoteError::Upstream("execution reverted".into()));
        }
        self.quotes
            .get(&(token_in, token_out, fee))
            .copied()
            .ok_or_else(|| QuoteError::Upstream("no pool at fee tier".into()))
    }
}

/// Stable-swap estimator over a static directional map.
#[derive(Default)]
pub struct MockSwapEstimator {
    estimates: HashMap<(TokenId, TokenId), Amount>,
}

impl MockSwapEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_estimate(
        mut self,
        token_in: TokenId,
        token_out: TokenId,
        amount_out: Amount,
    ) -> Self {
        self.estimates.insert((token_in, token_out), amount_out);
        self
    }
}

impl SwapEstimator for MockSwapEstimator {
    fn estimated_swap_amount(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        _amount_in: Amount,
    ) -> Result<Amount> {
        self.estimates
            .get(&(token_in, token_out))
            .copied()
            .ok_or_else(|| QuoteError::Upstream("pair not supported".into()))
    }
}

/// Quote source answering every query with one fixed amount.
///
/// Routing tests use the fixed answer as a marker for which source the
/// router picked.
pub struct FixedQuoteSource {
    kind: SourceKind,
    amount_out: Amount,
}

impl FixedQuoteSource {
    pub fn new(kind: SourceKind, amount_out: Amount) -> Self {
        Self { kind, amount_out }
    }
}

impl QuoteSource for FixedQuoteSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn quote(&self, _token_in: TokenId, _amount_in: Amount, _token_out: TokenId) -> Result<Amount> {
        Ok(self.amount_out)
    }
}

/// Quote source failing every query with a fixed error.
pub struct FailingQuoteSource {
    kind: SourceKind,
    error: QuoteError,
}

impl FailingQuoteSource {
    pub fn new(kind: SourceKind, error: QuoteError) -> Self {
        Self { kind, error }
    }
}

impl QuoteSource for FailingQuoteSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn quote(&self, _token_in: TokenId, _amount_in: Amount, _token_out: TokenId) -> Result<Amount> {
        Err(self.error.clone())
    }
}
