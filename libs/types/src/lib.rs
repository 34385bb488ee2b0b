//! # Shared Types - Token Identity, Amounts, and Error Taxonomy
//!
//! ## Purpose
//!
//! Foundation types shared by every crate in the quote-router workspace:
//! token identifiers (20-byte addresses, compared by identity only), unsigned
//! 256-bit amounts in each token's native decimal scale, the order-independent
//! pair key used by the routing table, and the error taxonomy surfaced by
//! every quote operation.
//!
//! ## Integration Points
//!
//! - **Consumers**: `quoter-amm` (math errors), `quote-sources` (adapter
//!   errors, token sorting), `quote-router` (pair keys, full taxonomy)
//! - **Identity rule**: tokens are compared by address, never by symbol; no
//!   two distinct addresses are ever treated as equal
//! - **Arithmetic rule**: amounts are unsigned and overflow is always fatal
//!   to the call, never wrapped or saturated

pub mod constants;
pub mod errors;
pub mod identifiers;

pub use errors::{MathError, QuoteError};
pub use identifiers::{sort_tokens, PairKey, TokenId};

/// Unsigned 256-bit amount in a token's native decimal scale.
pub use ethers_core::types::U256 as Amount;
