//! Integer intrinsics defined inline by the math header.

/// Position of the least significant set bit, counting from 1; 0 when
/// `x` is 0.
#[inline]
#[must_use]
pub fn ffs(x: i32) -> i32 {
    32 - (x & x.wrapping_neg()).leading_zeros() as i32
}

/// 24-bit signed multiply. Operands are assumed to fit in 24 bits, so
/// this is the low 32 bits of the full product.
#[inline]
#[must_use]
pub fn mul24(x: i32, y: i32) -> i32 {
    x.wrapping_mul(y)
}

/// 24-bit unsigned multiply, under the same assumption as [`mul24`].
#[inline]
#[must_use]
pub fn umul24(x: u32, y: u32) -> u32 {
    x.wrapping_mul(y)
}
