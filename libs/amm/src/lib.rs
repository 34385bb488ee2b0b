//! # Quoter AMM Library - Exact DEX Mathematics
//!
//! ## Purpose
//!
//! Fixed-point arithmetic matching each upstream protocol's own rounding and
//! fee rules, bit-for-bit. Every result here governs a real value transfer,
//! so all calculations run on unsigned 256-bit integers with 512-bit
//! intermediates where products can exceed 256 bits. There is no floating
//! point anywhere in this crate and no approximate decimal type: output must
//! equal what the upstream contract itself would compute.
//!
//! ## Integration Points
//!
//! - **Input Sources**: reserve and observation data handed in by the
//!   price-source adapters in `quote-sources`
//! - **Output Destinations**: adapter `quote` implementations
//! - **Protocol Support**: Uniswap V2 constant-product (and forks such as
//!   Sushiswap), Uniswap V3 tick-space TWAP quotes, price-feed rescaling
//! - **Rounding**: floor division throughout, except where a protocol pins a
//!   different direction (documented at the function)
//!
//! ## Architecture Role
//!
//! Pure functions only. Adapters own upstream I/O and the zero-liquidity /
//! staleness policy; this crate owns arithmetic and fails loudly on any
//! overflow or division by zero via [`types::MathError`].

pub mod fixed_point;
pub mod tick_math;
pub mod v2_math;

pub use fixed_point::{mul_div, pow10, scale_to_unit};
pub use tick_math::{mean_tick, quote_at_tick, sqrt_ratio_at_tick, MAX_TICK, MIN_TICK};
pub use v2_math::get_amount_out;

pub use ethers_core::types::{U256, U512};
pub use types::MathError;
