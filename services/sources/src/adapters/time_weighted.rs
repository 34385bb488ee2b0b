//! Time-weighted pool observation adapter
//!
//! Quotes at the arithmetic mean tick over a fixed window: reads the pool's
//! tick cumulatives at the window boundary and now, divides the delta by the
//! window (rounding toward negative infinity, as the pool's own consult
//! library does), and converts the mean tick into an exact price ratio.

use std::sync::Arc;

use tracing::debug;
use types::{sort_tokens, Amount, QuoteError, TokenId};

use quoter_amm::tick_math;

use crate::{ObservationReader, QuoteSource, Result, SourceKind};

/// Quote source backed by a pool's observation oracle, bound to one
/// averaging window at construction.
pub struct TimeWeightedPool {
    observations: Arc<dyn ObservationReader>,
    window_secs: u32,
}

impl TimeWeightedPool {
    /// `window_secs` is fixed for the adapter's lifetime; zero is rejected
    /// here so a misconfigured instance can never be constructed.
    pub fn new(observations: Arc<dyn ObservationReader>, window_secs: u32) -> Result<Self> {
        if window_secs == 0 {
            return Err(QuoteError::InvalidWindow);
        }
        Ok(Self {
            observations,
            window_secs,
        })
    }

    pub fn window_secs(&self) -> u32 {
        self.window_secs
    }
}

impl QuoteSource for TimeWeightedPool {
    fn kind(&self) -> SourceKind {
        SourceKind::TimeWeightedPool
    }

    fn quote(&self, token_in: TokenId, amount_in: Amount, token_out: TokenId) -> Result<Amount> {
        let (token0, token1) = sort_tokens(token_in, token_out);
        let cumulatives =
            self.observations
                .tick_cumulatives(token0, token1, &[self.window_secs, 0])?;
        let &[start, end] = cumulatives.as_slice() else {
            return Err(QuoteError::Upstream(format!(
                "expected 2 tick cumulatives, got {}",
                cumulatives.len()
            )));
        };

        // Cumulatives come from outside the core; a wrapped delta would
        // quote a plausible wrong price, so overflow is fatal here too.
        let delta = end
            .checked_sub(start)
            .ok_or(types::MathError::Overflow)?;
        let tick = tick_math::mean_tick(delta, self.window_secs)?;
        debug!(?token_in, ?token_out, tick, window = self.window_secs, "twap quote");
        tick_math::quote_at_tick(tick, amount_in, token_in, token_out).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockObservationReader;
    use ethers_core::types::U256;
    use types::constants::tokens::{DAI, USDC};

    fn e18(v: u64) -> U256 {
        U256::from(v) * U256::exp10(18)
    }

    #[test]
    fn zero_window_cannot_be_constructed() {
        let reader = Arc::new(MockObservationReader::new());
        assert!(matches!(
            TimeWeightedPool::new(reader, 0),
            Err(QuoteError::InvalidWindow)
        ));
    }

    #[test]
    fn flat_history_quotes_at_par() {
        // Mean tick 0 over the window: price 1.0 both directions.
        let reader = Arc::new(MockObservationReader::new().with_pool_tick(DAI, USDC, 0, 7200));
        let source = TimeWeightedPool::new(reader, 3600).unwrap();
        assert_eq!(source.window_secs(), 3600);
        assert_eq!(source.quote(DAI, e18(1), USDC).unwrap(), e18(1));
        assert_eq!(source.quote(USDC, e18(1), DAI).unwrap(), e18(1));
    }

    #[test]
    fn mean_tick_drives_the_quote() {
        let reader = Arc::new(MockObservationReader::new().with_pool_tick(DAI, USDC, 6932, 7200));
        let source = TimeWeightedPool::new(reader, 3600).unwrap();
        let out = source.quote(DAI, e18(1), USDC).unwrap();
        assert_eq!(
            out,
            tick_math::quote_at_tick(6932, e18(1), DAI, USDC).unwrap()
        );
        // 1.0001^6932 is about 2.0: selling the lower-address token doubles.
        assert!(out > e18(1));
    }

    #[test]
    fn cumulative_delta_overflow_fails_loudly() {
        // A reader handing back cumulatives whose difference exceeds i64
        // must fail the quote, not wrap into a plausible near-par tick.
        struct ExtremeCumulatives;
        impl crate::ObservationReader for ExtremeCumulatives {
            fn tick_cumulatives(
                &self,
                _token0: types::TokenId,
                _token1: types::TokenId,
                _seconds_agos: &[u32],
            ) -> crate::Result<Vec<i64>> {
                Ok(vec![i64::MIN, i64::MAX])
            }
        }

        let source = TimeWeightedPool::new(Arc::new(ExtremeCumulatives), 3600).unwrap();
        assert_eq!(
            source.quote(DAI, e18(1), USDC),
            Err(QuoteError::Math(types::MathError::Overflow))
        );
    }

    #[test]
    fn short_history_propagates_insufficient_observations() {
        let reader = Arc::new(MockObservationReader::new().with_pool_tick(DAI, USDC, 100, 600));
        let source = TimeWeightedPool::new(reader, 3600).unwrap();
        assert_eq!(
            source.quote(DAI, e18(1), USDC),
            Err(QuoteError::InsufficientObservations)
        );
    }
}
