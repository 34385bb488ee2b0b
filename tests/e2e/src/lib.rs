//! Shared fixtures for the end-to-end routing suite
//!
//! Builds a fully wired router over mock upstreams shaped like a mainnet
//! deployment: a V2 pool factory, a TWAP oracle, a price feed, an
//! aggregator, a swap quoter, and a stable-swap estimator, all quoting
//! DAI/USDC/UNI.

use std::sync::Arc;

use ethers_core::types::{Address, I256, U256};
use quote_router::Router;
use quote_sources::mocks::{
    MockAggregator, MockObservationReader, MockPriceFeed, MockReserveReader, MockSwapEstimator,
    MockSwapSimulator, MockTokenInfo,
};
use quote_sources::{
    AggregatorQuote, ConstantProductPool, ExternalQuoterCall, OracleFeed, SourceHandle,
    StableSwapQuote, TimeWeightedPool,
};
use types::constants::tokens::{DAI, UNI, USDC};

pub const GOVERNANCE: Address = Address::repeat_byte(0x90);
pub const RANDOM_USER: Address = Address::repeat_byte(0x42);

/// Install a fmt subscriber honoring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn e18(v: u64) -> U256 {
    U256::from(v) * U256::exp10(18)
}

/// Constant-product source over DAI/USDC and DAI/UNI pools.
pub fn v2_source() -> SourceHandle {
    let reserves = MockReserveReader::new()
        .with_pool(DAI, USDC, e18(1_000_000), e18(1_000_000))
        .with_pool(DAI, UNI, e18(100_000), e18(500_000));
    Arc::new(ConstantProductPool::new(Arc::new(reserves)))
}

/// One-hour TWAP source with a flat DAI/USDC tick history.
pub fn twap_source() -> SourceHandle {
    let observations = MockObservationReader::new().with_pool_tick(DAI, USDC, 0, 86_400);
    Arc::new(TimeWeightedPool::new(Arc::new(observations), 3_600).expect("non-zero window"))
}

/// Feed source reporting 1.0 at 8 decimals, USDC at 6 token decimals.
pub fn feed_source() -> SourceHandle {
    let feed = MockPriceFeed::new(I256::from(100_000_000i64), 8);
    let info = MockTokenInfo::new().with_decimals(USDC, 6);
    Arc::new(OracleFeed::new(Arc::new(feed), Arc::new(info)))
}

/// Aggregator source quoting every ordered pair of the three tokens.
pub fn aggregator_source(amount_out: U256) -> SourceHandle {
    let mut aggregator = MockAggregator::new();
    for token_in in [DAI, USDC, UNI] {
        for token_out in [DAI, USDC, UNI] {
            if token_in != token_out {
                aggregator = aggregator.with_route(token_in, token_out, amount_out);
            }
        }
    }
    Arc::new(AggregatorQuote::new(Arc::new(aggregator)))
}

/// Swap-simulation source quoting DAI -> USDC at the default fee tier.
pub fn quoter_source(amount_out: U256) -> SourceHandle {
    let simulator = MockSwapSimulator::new().with_quote(DAI, USDC, 3000, amount_out);
    Arc::new(ExternalQuoterCall::new(Arc::new(simulator)))
}

/// Stable-swap source quoting DAI <-> USDC.
pub fn stable_swap_source(amount_out: U256) -> SourceHandle {
    let estimator = MockSwapEstimator::new()
        .with_estimate(DAI, USDC, amount_out)
        .with_estimate(USDC, DAI, amount_out);
    Arc::new(StableSwapQuote::new(Arc::new(estimator)))
}

/// A fully layered table: a default, a DAI token override, and a DAI/USDC
/// pair override, all installed by governance.
pub fn layered_router(
    default: SourceHandle,
    dai_override: SourceHandle,
    dai_usdc_override: SourceHandle,
) -> Router {
    let mut router = Router::new(GOVERNANCE);
    router
        .set_default_source(GOVERNANCE, default)
        .expect("governance may set default");
    router
        .set_token_source(GOVERNANCE, DAI, dai_override)
        .expect("governance may set token source");
    router
        .set_pair_source(GOVERNANCE, DAI, USDC, dai_usdc_override)
        .expect("governance may set pair source");
    router
}
