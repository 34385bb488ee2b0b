//! Constant-product output amounts with proportional fees
//!
//! Reproduces `UniswapV2Library.getAmountOut` exactly: the fee is applied to
//! the input amount as `fee_numerator / fee_denominator` (997/1000 for the
//! canonical 0.30%), all arithmetic is checked 256-bit, and the final
//! division floors. Callers are responsible for rejecting empty reserves
//! before invoking the formula; with non-zero reserves the denominator
//! cannot be zero.

use ethers_core::types::U256;
use types::MathError;

/// Canonical Uniswap V2 fee: numerator of the retained input fraction.
pub const DEFAULT_FEE_NUMERATOR: u32 = 997;
/// Canonical Uniswap V2 fee denominator.
pub const DEFAULT_FEE_DENOMINATOR: u32 = 1000;

/// Exact output for selling `amount_in` against `(reserve_in, reserve_out)`.
///
/// `amount_out = amount_in * fee_num * reserve_out
///             / (reserve_in * fee_den + amount_in * fee_num)`
///
/// Overflow anywhere in the numerator or denominator is fatal, matching the
/// on-chain revert. Rounding is floor.
pub fn get_amount_out(
    amount_in: U256,
    reserve_in: U256,
    reserve_out: U256,
    fee_numerator: u32,
    fee_denominator: u32,
) -> Result<U256, MathError> {
    let amount_in_with_fee = amount_in
        .checked_mul(U256::from(fee_numerator))
        .ok_or(MathError::Overflow)?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out)
        .ok_or(MathError::Overflow)?;
    let denominator = reserve_in
        .checked_mul(U256::from(fee_denominator))
        .ok_or(MathError::Overflow)?
        .checked_add(amount_in_with_fee)
        .ok_or(MathError::Overflow)?;
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    Ok(numerator / denominator)
}
