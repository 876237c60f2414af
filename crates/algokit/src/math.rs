//! Constants and scalar helpers used across the toolkit.
//!
//! The constants are fixed literals. `QUARTER_PI` is kept at its historical
//! value, which is 3π/2, and `MAX_UINT32` is 2^32 (one past `u32::MAX`);
//! the LCG relies on the latter as its modulus.
//!
//! `truncate` and `fast_round` follow 32-bit integer conversion semantics:
//! they are only meaningful for magnitudes that fit in an `i32`.

/// 2π.
#[allow(clippy::excessive_precision)]
pub const PI2: f64 = 6.283185307179586476925286766559;
/// π/2.
#[allow(clippy::excessive_precision)]
pub const HALF_PI: f64 = 1.5707963267948966192313216916398;
/// Historical constant; numerically 3π/2, not π/4.
#[allow(clippy::excessive_precision)]
pub const QUARTER_PI: f64 = 4.7123889803846898576939650749193;
/// Largest signed 32-bit value.
pub const MAX_INT32: i32 = 2_147_483_647;
/// 2^32.
pub const MAX_UINT32: u64 = 4_294_967_296;

/// Magnitudes below this snap to zero in `clamp_to_zero`.
pub const ZERO_EPS: f64 = 1e-9;

#[inline]
pub fn sqr(x: f64) -> f64 {
    x * x
}

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Truncate toward zero, saturating at `MAX_INT32` for large inputs.
///
/// Inputs below `i32::MIN` wrap modulo 2^32 rather than saturate.
#[inline]
pub fn truncate(val: f64) -> i32 {
    if val >= MAX_INT32 as f64 {
        MAX_INT32
    } else {
        to_int32(val)
    }
}

/// Round by adding 0.5 and truncating toward zero.
///
/// Negative halves round toward zero (`fast_round(-1.5) == -1`) and there is
/// no upper clamp.
#[inline]
pub fn fast_round(val: f64) -> i32 {
    to_int32(val + 0.5)
}

/// Snap values within `ZERO_EPS` of zero to exactly `0.0`.
#[inline]
pub fn clamp_to_zero(val: f64) -> f64 {
    clamp_to_zero_within(val, ZERO_EPS)
}

/// `0.0` when `-eps < val < eps`, else `val`.
#[inline]
pub fn clamp_to_zero_within(val: f64, eps: f64) -> f64 {
    if val < eps && val > -eps {
        0.0
    } else {
        val
    }
}

/// Cap at `MAX_INT32` without touching the fractional part of smaller values.
#[inline]
pub fn clamp_to_max_int32(val: f64) -> f64 {
    if val >= MAX_INT32 as f64 {
        MAX_INT32 as f64
    } else {
        val
    }
}

/// Truncate toward zero and wrap into the signed 32-bit range.
/// Non-finite inputs map to 0.
fn to_int32(val: f64) -> i32 {
    if !val.is_finite() {
        return 0;
    }
    let wrapped = val.trunc().rem_euclid(MAX_UINT32 as f64);
    if wrapped >= 2_147_483_648.0 {
        (wrapped - MAX_UINT32 as f64) as i32
    } else {
        wrapped as i32
    }
}
