//! Stable-swap estimator adapter
//!
//! Forwards the trade to a stable-swap venue's estimation endpoint and
//! returns its answer directly. Same failure policy as the aggregator
//! adapter: an errored call or zero output means no usable route.

use std::sync::Arc;

use tracing::warn;
use types::{Amount, QuoteError, TokenId};

use crate::{QuoteSource, Result, SourceKind, SwapEstimator};

/// Quote source backed by one stable-swap estimation endpoint.
pub struct StableSwapQuote {
    estimator: Arc<dyn SwapEstimator>,
}

impl StableSwapQuote {
    pub fn new(estimator: Arc<dyn SwapEstimator>) -> Self {
        Self { estimator }
    }
}

impl QuoteSource for StableSwapQuote {
    fn kind(&self) -> SourceKind {
        SourceKind::StableSwapQuote
    }

    fn quote(&self, token_in: TokenId, amount_in: Amount, token_out: TokenId) -> Result<Amount> {
        let amount_out = self
            .estimator
            .estimated_swap_amount(token_in, token_out, amount_in)
            .map_err(|err| {
                warn!(?token_in, ?token_out, %err, "stable-swap estimate failed");
                QuoteError::NoRouteFound
            })?;
        if amount_out.is_zero() {
            return Err(QuoteError::NoRouteFound);
        }
        Ok(amount_out)
    }
}
