//! The resolution table and its precedence algorithm

use std::collections::HashMap;

use tracing::{debug, info, warn};
use ethers_core::types::Address;
use types::{Amount, PairKey, QuoteError, TokenId};

use quote_sources::SourceHandle;

/// Routing service owning the layered override table.
///
/// Three tiers, highest precedence first:
/// 1. per-pair override, looked up order-independently;
/// 2. per-token override for the **selling** token only — the buying
///    token's entry is intentionally never consulted;
/// 3. the default source.
///
/// An absent tier falls through to the next; if nothing matches the query
/// fails with [`QuoteError::NoSourceConfigured`].
pub struct Router {
    owner: Address,
    default_source: Option<SourceHandle>,
    token_sources: HashMap<TokenId, SourceHandle>,
    pair_sources: HashMap<PairKey, SourceHandle>,
}

impl Router {
    /// Empty table; `owner` is the only principal allowed to mutate it.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            default_source: None,
            token_sources: HashMap::new(),
            pair_sources: HashMap::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Set the fallback source used when no override matches.
    pub fn set_default_source(
        &mut self,
        caller: Address,
        source: SourceHandle,
    ) -> Result<(), QuoteError> {
        self.ensure_owner(caller)?;
        info!(kind = ?source.kind(), "default source updated");
        self.default_source = Some(source);
        Ok(())
    }

    /// Set the override applied whenever `token` is the selling token.
    pub fn set_token_source(
        &mut self,
        caller: Address,
        token: TokenId,
        source: SourceHandle,
    ) -> Result<(), QuoteError> {
        self.ensure_owner(caller)?;
        info!(?token, kind = ?source.kind(), "token source updated");
        self.token_sources.insert(token, source);
        Ok(())
    }

    /// Set the override for the unordered pair `(token_a, token_b)`.
    pub fn set_pair_source(
        &mut self,
        caller: Address,
        token_a: TokenId,
        token_b: TokenId,
        source: SourceHandle,
    ) -> Result<(), QuoteError> {
        self.ensure_owner(caller)?;
        info!(?token_a, ?token_b, kind = ?source.kind(), "pair source updated");
        self.pair_sources
            .insert(PairKey::new(token_a, token_b), source);
        Ok(())
    }

    /// Read-only resolution probe: which source would answer this query.
    ///
    /// Same algorithm as [`Router::quote`] without executing the quote.
    pub fn resolve(&self, token_in: TokenId, token_out: TokenId) -> Result<SourceHandle, QuoteError> {
        if let Some(source) = self.pair_sources.get(&PairKey::new(token_in, token_out)) {
            debug!(?token_in, ?token_out, "resolved via pair override");
            return Ok(source.clone());
        }
        // Only the selling token's single-token override is consulted.
        if let Some(source) = self.token_sources.get(&token_in) {
            debug!(?token_in, "resolved via token override");
            return Ok(source.clone());
        }
        if let Some(source) = &self.default_source {
            debug!("resolved via default source");
            return Ok(source.clone());
        }
        Err(QuoteError::NoSourceConfigured)
    }

    /// Resolve a source and return its answer unmodified.
    ///
    /// A failure from the chosen source fails the whole query; precedence is
    /// never re-run against a lower tier.
    pub fn quote(
        &self,
        token_in: TokenId,
        amount_in: Amount,
        token_out: TokenId,
    ) -> Result<Amount, QuoteError> {
        let source = self.resolve(token_in, token_out)?;
        source.quote(token_in, amount_in, token_out)
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), QuoteError> {
        if caller != self.owner {
            warn!(?caller, "rejected table mutation from non-owner");
            return Err(QuoteError::Unauthorized);
        }
        Ok(())
    }
}
