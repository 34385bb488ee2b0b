//! Push-based price feed adapter
//!
//! The feed reports the price of `token_in` in quote-currency units at its
//! own precision. The adapter multiplies the sold amount by that price,
//! removes the feed's scale, and rescales from the selling token's native
//! precision to the buying token's. Every step floors; there is no other
//! precision loss.

use std::sync::Arc;

use tracing::debug;
use types::{Amount, QuoteError, TokenId};

use quoter_amm::fixed_point::{mul_div, pow10, scale_to_unit};

use crate::{PriceFeedReader, QuoteSource, Result, SourceKind, TokenInfoReader};

/// Quote source backed by one price feed.
pub struct OracleFeed {
    feed: Arc<dyn PriceFeedReader>,
    token_info: Arc<dyn TokenInfoReader>,
}

impl OracleFeed {
    pub fn new(feed: Arc<dyn PriceFeedReader>, token_info: Arc<dyn TokenInfoReader>) -> Self {
        Self { feed, token_info }
    }
}

impl QuoteSource for OracleFeed {
    fn kind(&self) -> SourceKind {
        SourceKind::OracleFeed
    }

    fn quote(&self, token_in: TokenId, amount_in: Amount, token_out: TokenId) -> Result<Amount> {
        let answer = self.feed.latest_answer()?;
        if answer.is_negative() || answer.is_zero() {
            return Err(QuoteError::InvalidPriceData);
        }
        let price = answer.into_raw();
        let feed_decimals = self.feed.decimals();

        let decimals_in = self.token_info.decimals(token_in)?;
        let decimals_out = self.token_info.decimals(token_out)?;

        debug!(?token_in, ?token_out, %price, feed_decimals, "feed quote");
        let unscaled = mul_div(amount_in, price, pow10(feed_decimals)?)?;
        scale_to_unit(unscaled, decimals_in, decimals_out).map_err(Into::into)
    }
}
