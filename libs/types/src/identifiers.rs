//! Token identity and the order-independent pair key
//!
//! Tokens are identified by their 20-byte contract address. The routing
//! table's per-pair tier must be symmetric: an entry stored for `(A, B)`
//! has to be found when querying `(B, A)`. [`PairKey`] guarantees this by
//! always holding the lower address first.

use ethers_core::types::Address;
use serde::{Deserialize, Serialize};

/// Opaque 20-byte token identifier. Identity comparison only.
pub type TokenId = Address;

/// Sort two token addresses into canonical order (lower identity first).
///
/// This mirrors the ordering pools themselves use for `token0`/`token1`,
/// so reserve lookups and pair keys agree on direction.
pub fn sort_tokens(a: TokenId, b: TokenId) -> (TokenId, TokenId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Order-independent key for an unordered token pair.
///
/// `PairKey::new(a, b) == PairKey::new(b, a)` for all addresses, which is
/// what makes pair-tier lookups symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    token0: TokenId,
    token1: TokenId,
}

impl PairKey {
    pub fn new(a: TokenId, b: TokenId) -> Self {
        let (token0, token1) = sort_tokens(a, b);
        Self { token0, token1 }
    }

    /// Lower of the two addresses.
    pub fn token0(&self) -> TokenId {
        self.token0
    }

    /// Higher of the two addresses.
    pub fn token1(&self) -> TokenId {
        self.token1
    }
}
