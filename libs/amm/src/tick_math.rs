//! Uniswap V3 tick mathematics for time-weighted quotes
//!
//! Converts tick-space observations into exact price ratios. The conversion
//! uses the reference implementation's Q128.128 constant ladder, so the
//! sqrt ratio produced for any tick is bit-identical to what the pool
//! contract itself reports. Quotes derived from a tick follow
//! `OracleLibrary.getQuoteAtTick`, including the dual ratioX192/ratioX128
//! paths and the direction rule based on canonical token ordering.

use ethers_core::types::U256;
use types::{MathError, TokenId};

use crate::fixed_point::{mul_div, u512_to_u256};

/// Lowest tick with a representable sqrt ratio.
pub const MIN_TICK: i32 = -887272;
/// Highest tick with a representable sqrt ratio.
pub const MAX_TICK: i32 = 887272;

/// Q128.128 multipliers for each bit of the tick magnitude. The `0x1` bit is
/// handled inline because it doubles as the ladder's starting value.
const TICK_FACTORS: [(u32, u128); 19] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

/// Sqrt of the price ratio at `tick`, as a Q64.96 fixed-point number.
///
/// Bit-identical to `TickMath.getSqrtRatioAtTick`, including the final
/// round-up when truncating from Q128.128 to Q64.96.
pub fn sqrt_ratio_at_tick(tick: i32) -> Result<U256, MathError> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return Err(MathError::TickOutOfRange(tick));
    }

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(0xfffcb933bd6fad37aa2d162d1a594001u128)
    } else {
        U256::one() << 128
    };
    for (mask, factor) in TICK_FACTORS {
        if abs_tick & mask != 0 {
            ratio = mul_shift_128(ratio, U256::from(factor))?;
        }
    }
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Truncate Q128.128 -> Q64.96, rounding up so the result round-trips
    // through the inverse tick lookup exactly as the reference does.
    let dust = ratio & ((U256::one() << 32) - U256::one());
    let mut sqrt_ratio = ratio >> 32;
    if !dust.is_zero() {
        sqrt_ratio = sqrt_ratio + U256::one();
    }
    Ok(sqrt_ratio)
}

/// `(a * b) >> 128` without intermediate overflow.
fn mul_shift_128(a: U256, b: U256) -> Result<U256, MathError> {
    u512_to_u256(a.full_mul(b) >> 128)
}

/// Amount of `quote_token` equivalent to `base_amount` of `base_token` at
/// the price implied by `tick`.
///
/// Follows `OracleLibrary.getQuoteAtTick`: when the sqrt ratio fits in 128
/// bits the price is squared into a Q64.192 ratio directly, otherwise it is
/// first reduced to Q128.128 to keep the square representable. Direction is
/// decided by address order, because the tick prices `token1` in units of
/// `token0` for the canonically sorted pair.
pub fn quote_at_tick(
    tick: i32,
    base_amount: U256,
    base_token: TokenId,
    quote_token: TokenId,
) -> Result<U256, MathError> {
    let sqrt_ratio = sqrt_ratio_at_tick(tick)?;

    if sqrt_ratio <= U256::from(u128::MAX) {
        let ratio_x192 = sqrt_ratio
            .checked_mul(sqrt_ratio)
            .ok_or(MathError::Overflow)?;
        let q192 = U256::one() << 192;
        if base_token < quote_token {
            mul_div(ratio_x192, base_amount, q192)
        } else {
            mul_div(q192, base_amount, ratio_x192)
        }
    } else {
        let ratio_x128 = mul_div(sqrt_ratio, sqrt_ratio, U256::one() << 64)?;
        let q128 = U256::one() << 128;
        if base_token < quote_token {
            mul_div(ratio_x128, base_amount, q128)
        } else {
            mul_div(q128, base_amount, ratio_x128)
        }
    }
}

/// Arithmetic mean tick over a window from a tick-cumulative delta.
///
/// Integer division truncates toward zero, but the reference rounds toward
/// negative infinity, so a negative non-exact delta is nudged down one tick.
pub fn mean_tick(tick_cumulative_delta: i64, window: u32) -> Result<i32, MathError> {
    if window == 0 {
        return Err(MathError::DivisionByZero);
    }
    let window = i64::from(window);
    let mut tick = tick_cumulative_delta / window;
    if tick_cumulative_delta < 0 && tick_cumulative_delta % window != 0 {
        tick -= 1;
    }
    let tick = i32::try_from(tick).map_err(|_| MathError::Overflow)?;
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange(tick));
    }
    Ok(tick)
}
