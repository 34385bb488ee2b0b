//! One adapter per external pricing mechanism
//!
//! Every adapter here implements [`crate::QuoteSource`] and owns nothing but
//! its upstream handle and construction-time parameters. The hard part is
//! the math: each adapter must reproduce its upstream protocol's own
//! rounding and fee rules exactly, which is why all arithmetic goes through
//! `quoter-amm` rather than being inlined.

mod aggregator;
mod constant_product;
mod external_quoter;
mod oracle_feed;
mod stable_swap;
mod time_weighted;

pub use aggregator::AggregatorQuote;
pub use constant_product::ConstantProductPool;
pub use external_quoter::ExternalQuoterCall;
pub use oracle_feed::OracleFeed;
pub use stable_swap::StableSwapQuote;
pub use time_weighted::TimeWeightedPool;
