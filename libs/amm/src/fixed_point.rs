//! Wide-intermediate multiply/divide and decimal rescaling
//!
//! `a * b / denominator` overflows 256 bits long before the final division
//! for realistic pool reserves, so the product is taken in 512 bits and only
//! the quotient is required to fit back into 256. Division by zero is a
//! [`MathError::DivisionByZero`], never a silent zero.

use ethers_core::types::{U256, U512};
use types::MathError;

/// Largest power of ten representable in 256 bits is 10^77.
const MAX_POW10_EXP: u8 = 77;

/// Floor of `a * b / denominator` with a 512-bit intermediate product.
///
/// Errors with [`MathError::Overflow`] when the quotient itself does not fit
/// in 256 bits, matching the revert an on-chain FullMath.mulDiv would raise.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let quotient = a.full_mul(b) / U512::from(denominator);
    u512_to_u256(quotient)
}

/// `10^exp`, rejecting exponents whose result exceeds 256 bits.
pub fn pow10(exp: u8) -> Result<U256, MathError> {
    if exp > MAX_POW10_EXP {
        return Err(MathError::DecimalsOutOfRange(exp));
    }
    U256::from(10)
        .checked_pow(U256::from(exp))
        .ok_or(MathError::DecimalsOutOfRange(exp))
}

/// Rescale `value` from `from_decimals` to `to_decimals`.
///
/// Scaling up multiplies by the decimal delta (checked); scaling down floor
/// divides, which is the only precision loss this function permits.
pub fn scale_to_unit(value: U256, from_decimals: u8, to_decimals: u8) -> Result<U256, MathError> {
    use std::cmp::Ordering;

    match to_decimals.cmp(&from_decimals) {
        Ordering::Equal => Ok(value),
        Ordering::Greater => value
            .checked_mul(pow10(to_decimals - from_decimals)?)
            .ok_or(MathError::Overflow),
        Ordering::Less => Ok(value / pow10(from_decimals - to_decimals)?),
    }
}

/// Truncating conversion is an overflow, not a wrap.
pub(crate) fn u512_to_u256(value: U512) -> Result<U256, MathError> {
    U256::try_from(value).map_err(|_| MathError::Overflow)
}
