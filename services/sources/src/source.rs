//! The uniform quote contract every price source implements

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use types::{Amount, TokenId};

use crate::Result;

/// Which pricing mechanism a source encapsulates. Used for dispatch-free
/// introspection and structured logging, never for routing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    ConstantProductPool,
    TimeWeightedPool,
    OracleFeed,
    AggregatorQuote,
    ExternalQuoterCall,
    StableSwapQuote,
}

/// A price source answering "if I sell `amount_in` of `token_in`, how much
/// `token_out` do I receive?".
///
/// Implementations are immutable after construction, side-effect-free with
/// respect to owned state, and deterministic given the upstream's current
/// state. Upstream reads are synchronous blocking calls: a quote either
/// returns or the whole query fails, with no internal retry.
pub trait QuoteSource: Send + Sync {
    /// The pricing mechanism behind this source.
    fn kind(&self) -> SourceKind;

    /// Exact amount of `token_out` received for selling `amount_in` of
    /// `token_in` at the upstream's current state.
    fn quote(&self, token_in: TokenId, amount_in: Amount, token_out: TokenId) -> Result<Amount>;
}

/// Shared handle to an immutable price source. The routing table stores
/// these; replacing a table entry repoints the handle, it never mutates the
/// adapter behind it.
pub type SourceHandle = Arc<dyn QuoteSource>;
