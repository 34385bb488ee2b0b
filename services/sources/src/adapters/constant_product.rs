//! V2-style constant-product pool adapter
//!
//! Reads live reserves for the pair and applies the x*y=k output formula
//! with a proportional input fee. Reserves come back ordered by the pool's
//! own canonical token sort (lower address first), not by call order, so the
//! adapter re-maps them to reserve-in/reserve-out before applying the
//! formula.

use std::sync::Arc;

use tracing::debug;
use types::{sort_tokens, Amount, QuoteError, TokenId};

use quoter_amm::v2_math::{self, DEFAULT_FEE_DENOMINATOR, DEFAULT_FEE_NUMERATOR};

use crate::{QuoteSource, ReserveReader, Result, SourceKind};

/// Quote source backed by one constant-product pool factory.
pub struct ConstantProductPool {
    reserves: Arc<dyn ReserveReader>,
    fee_numerator: u32,
    fee_denominator: u32,
}

impl ConstantProductPool {
    /// Adapter with the canonical 0.30% fee (997/1000).
    pub fn new(reserves: Arc<dyn ReserveReader>) -> Self {
        Self::with_fee(reserves, DEFAULT_FEE_NUMERATOR, DEFAULT_FEE_DENOMINATOR)
    }

    /// Adapter for a fork with a different proportional fee.
    pub fn with_fee(reserves: Arc<dyn ReserveReader>, fee_numerator: u32, fee_denominator: u32) -> Self {
        Self {
            reserves,
            fee_numerator,
            fee_denominator,
        }
    }
}

impl QuoteSource for ConstantProductPool {
    fn kind(&self) -> SourceKind {
        SourceKind::ConstantProductPool
    }

    fn quote(&self, token_in: TokenId, amount_in: Amount, token_out: TokenId) -> Result<Amount> {
        let (token0, token1) = sort_tokens(token_in, token_out);
        let (reserve0, reserve1) = self.reserves.reserves(token0, token1)?;

        let (reserve_in, reserve_out) = if token_in == token0 {
            (reserve0, reserve1)
        } else {
            (reserve1, reserve0)
        };
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(QuoteError::InsufficientLiquidity);
        }

        debug!(
            ?token_in,
            ?token_out,
            %reserve_in,
            %reserve_out,
            "constant-product quote"
        );
        v2_math::get_amount_out(
            amount_in,
            reserve_in,
            reserve_out,
            self.fee_numerator,
            self.fee_denominator,
        )
        .map_err(Into::into)
    }
}
