//! End-to-end routing scenarios over fully wired sources
//!
//! Governance wires a default source, a DAI token override, and a DAI/USDC
//! pair override, then queries must land on the right tier and carry each
//! source's answer through unmodified.

use ethers_core::types::U256;
use quote_sources::SourceKind;
use quoter_e2e_tests::*;
use types::constants::tokens::{DAI, UNI, USDC};
use types::QuoteError;

#[test]
fn queries_land_on_the_correct_tier() {
    init_tracing();
    // default = aggregator, token[DAI] = V2 pool, pair[DAI,USDC] = stable swap
    let router = layered_router(
        aggregator_source(U256::from(111u32)),
        v2_source(),
        stable_swap_source(U256::from(333u32)),
    );

    // (DAI, UNI): no pair override, DAI token override wins.
    assert_eq!(
        router.resolve(DAI, UNI).unwrap().kind(),
        SourceKind::ConstantProductPool
    );
    // (DAI, USDC): pair override wins over the token override.
    assert_eq!(
        router.resolve(DAI, USDC).unwrap().kind(),
        SourceKind::StableSwapQuote
    );
    // (UNI, USDC): nothing matches but the default.
    assert_eq!(
        router.resolve(UNI, USDC).unwrap().kind(),
        SourceKind::AggregatorQuote
    );
}

#[test]
fn quotes_flow_through_the_resolved_source() {
    let router = layered_router(
        aggregator_source(U256::from(111u32)),
        v2_source(),
        stable_swap_source(U256::from(333u32)),
    );

    // Pair override answers the DAI -> USDC query.
    assert_eq!(
        router.quote(DAI, e18(1), USDC).unwrap(),
        U256::from(333u32)
    );
    // Token override (the live V2 pool) answers DAI -> UNI with pool math.
    let expected = quoter_amm::get_amount_out(e18(1), e18(500_000), e18(100_000), 997, 1000)
        .unwrap();
    assert_eq!(router.quote(DAI, e18(1), UNI).unwrap(), expected);
    // Default answers UNI -> USDC.
    assert_eq!(
        router.quote(UNI, e18(1), USDC).unwrap(),
        U256::from(111u32)
    );
}

#[test]
fn resolution_is_symmetric_for_pair_overrides_only() {
    let router = layered_router(
        aggregator_source(U256::from(111u32)),
        v2_source(),
        stable_swap_source(U256::from(333u32)),
    );

    // The pair override serves both directions.
    assert_eq!(
        router.resolve(USDC, DAI).unwrap().kind(),
        SourceKind::StableSwapQuote
    );
    // The DAI token override does NOT apply when DAI is the buying token.
    assert_eq!(
        router.resolve(UNI, DAI).unwrap().kind(),
        SourceKind::AggregatorQuote
    );
}

#[test]
fn every_adapter_kind_serves_a_quote_end_to_end() {
    let mut router = quote_router::Router::new(GOVERNANCE);
    router
        .set_default_source(GOVERNANCE, feed_source())
        .unwrap();
    router
        .set_token_source(GOVERNANCE, UNI, twap_source())
        .unwrap();
    router
        .set_pair_source(GOVERNANCE, DAI, USDC, quoter_source(U256::from(999u32)))
        .unwrap();

    // Pair tier: the swap simulator's answer verbatim.
    assert_eq!(
        router.quote(DAI, e18(1), USDC).unwrap(),
        U256::from(999u32)
    );
    // Default tier: feed at 1.0 rescales 18-decimal DAI to 6-decimal USDC.
    assert_eq!(
        router.quote(USDC, e18(1), DAI).unwrap(),
        e18(1) * U256::exp10(12)
    );
}

#[test]
fn twap_default_serves_flat_history_at_par() {
    let mut router = quote_router::Router::new(GOVERNANCE);
    router.set_default_source(GOVERNANCE, twap_source()).unwrap();
    assert_eq!(router.quote(DAI, e18(7), USDC).unwrap(), e18(7));
}

#[test]
fn non_governance_callers_cannot_rewire_routing() {
    let mut router = layered_router(
        aggregator_source(U256::from(111u32)),
        v2_source(),
        stable_swap_source(U256::from(333u32)),
    );

    let attempt = aggregator_source(U256::from(666u32));
    assert_eq!(
        router.set_default_source(RANDOM_USER, attempt.clone()),
        Err(QuoteError::Unauthorized)
    );
    assert_eq!(
        router.set_token_source(RANDOM_USER, DAI, attempt.clone()),
        Err(QuoteError::Unauthorized)
    );
    assert_eq!(
        router.set_pair_source(RANDOM_USER, DAI, USDC, attempt),
        Err(QuoteError::Unauthorized)
    );

    // Routing is exactly as governance configured it.
    assert_eq!(
        router.quote(UNI, e18(1), USDC).unwrap(),
        U256::from(111u32)
    );
    assert_eq!(
        router.quote(DAI, e18(1), USDC).unwrap(),
        U256::from(333u32)
    );
}

#[test]
fn source_failures_reach_the_caller_unswallowed() {
    // Pair override points at a pool with no liquidity for the pair.
    let empty_pool = {
        let reserves = quote_sources::mocks::MockReserveReader::new().with_pool(
            DAI,
            USDC,
            U256::zero(),
            e18(1),
        );
        std::sync::Arc::new(quote_sources::ConstantProductPool::new(std::sync::Arc::new(
            reserves,
        ))) as quote_sources::SourceHandle
    };

    let router = layered_router(aggregator_source(U256::from(111u32)), v2_source(), empty_pool);
    // The healthy default and token override must not be substituted.
    assert_eq!(
        router.quote(DAI, e18(1), USDC),
        Err(QuoteError::InsufficientLiquidity)
    );
}

#[test]
fn successive_queries_with_unchanged_upstreams_are_idempotent() {
    let router = layered_router(
        aggregator_source(U256::from(111u32)),
        v2_source(),
        stable_swap_source(U256::from(333u32)),
    );
    let first = router.quote(DAI, e18(123), UNI).unwrap();
    let second = router.quote(DAI, e18(123), UNI).unwrap();
    assert_eq!(first, second);
}
