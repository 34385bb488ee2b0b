//! Swap-simulation adapter
//!
//! Simulates an exact-input single-hop swap against an external quoting
//! endpoint and returns the simulated output exactly as reported. The fee
//! tier and price-limit bound are fixed at construction; one adapter
//! instance always simulates against the same pool parameters.

use std::sync::Arc;

use tracing::warn;
use types::{Amount, QuoteError, TokenId};

use crate::{QuoteSource, Result, SourceKind, SwapSimulator};

/// Default fee tier: 0.30% in hundredths of a basis point.
pub const DEFAULT_SWAP_FEE: u32 = 3000;

/// Quote source backed by one swap-simulation endpoint.
pub struct ExternalQuoterCall {
    quoter: Arc<dyn SwapSimulator>,
    fee: u32,
    sqrt_price_limit: Amount,
}

impl ExternalQuoterCall {
    /// Adapter at the default fee tier with an unbounded price limit.
    pub fn new(quoter: Arc<dyn SwapSimulator>) -> Self {
        Self::with_params(quoter, DEFAULT_SWAP_FEE, Amount::zero())
    }

    /// Adapter pinned to a specific fee tier and price-limit bound.
    pub fn with_params(quoter: Arc<dyn SwapSimulator>, fee: u32, sqrt_price_limit: Amount) -> Self {
        Self {
            quoter,
            fee,
            sqrt_price_limit,
        }
    }

    pub fn fee(&self) -> u32 {
        self.fee
    }
}

impl QuoteSource for ExternalQuoterCall {
    fn kind(&self) -> SourceKind {
        SourceKind::ExternalQuoterCall
    }

    fn quote(&self, token_in: TokenId, amount_in: Amount, token_out: TokenId) -> Result<Amount> {
        self.quoter
            .quote_exact_input_single(token_in, token_out, self.fee, amount_in, self.sqrt_price_limit)
            .map_err(|err| {
                warn!(?token_in, ?token_out, fee = self.fee, %err, "swap simulation failed");
                QuoteError::QuoteSimulationFailed(err.to_string())
            })
    }
}
