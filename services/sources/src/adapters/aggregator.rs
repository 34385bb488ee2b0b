//! Quote-aggregation endpoint adapter
//!
//! Forwards the trade to an external aggregator and returns its reported
//! best amount directly, with no local recomputation. A failed call or an
//! empty route (reported as zero output) is `NoRouteFound`.

use std::sync::Arc;

use tracing::warn;
use types::{Amount, QuoteError, TokenId};

use crate::{AggregatorCaller, QuoteSource, Result, SourceKind};

/// Quote source backed by one aggregation endpoint.
pub struct AggregatorQuote {
    aggregator: Arc<dyn AggregatorCaller>,
}

impl AggregatorQuote {
    pub fn new(aggregator: Arc<dyn AggregatorCaller>) -> Self {
        Self { aggregator }
    }
}

impl QuoteSource for AggregatorQuote {
    fn kind(&self) -> SourceKind {
        SourceKind::AggregatorQuote
    }

    fn quote(&self, token_in: TokenId, amount_in: Amount, token_out: TokenId) -> Result<Amount> {
        let amount_out = self
            .aggregator
            .expected_return(token_in, token_out, amount_in)
            .map_err(|err| {
                warn!(?token_in, ?token_out, %err, "aggregator call failed");
                QuoteError::NoRouteFound
            })?;
        if amount_out.is_zero() {
            return Err(QuoteError::NoRouteFound);
        }
        Ok(amount_out)
    }
}
