//! Well-known mainnet token addresses
//!
//! Centralized so tests and fixtures agree on one canonical copy. The core
//! never dereferences these; tokens are opaque identifiers everywhere.

use ethers_core::types::H160;
use hex_literal::hex;

use crate::TokenId;

/// Token contract addresses.
pub mod tokens {
    use super::*;

    pub const DAI: TokenId = H160(hex!("6B175474E89094C44Da98b954EedeAC495271d0F"));
    pub const USDC: TokenId = H160(hex!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"));
    pub const UNI: TokenId = H160(hex!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984"));
}
