//! Typed `min`, `max` and `abs`.
//!
//! The catalogue lists these as C overload sets. Here the same-type
//! forms are plain generics and the mixed forms go through [`Promote`],
//! which applies C's usual arithmetic conversions: a signed operand
//! meeting an unsigned one of the same width becomes unsigned, and
//! `float` meeting `double` becomes `double`.

/// Smaller of two values of one type. Returns `a` when they compare equal
/// or are unordered.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Larger of two values of one type. Returns `a` when they compare equal
/// or are unordered.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// Absolute value with the wrap-around of two's complement for the most
/// negative integer.
pub trait Abs {
    fn abs_value(self) -> Self;
}

impl Abs for i32 {
    #[inline]
    fn abs_value(self) -> Self {
        self.wrapping_abs()
    }
}

impl Abs for i64 {
    #[inline]
    fn abs_value(self) -> Self {
        self.wrapping_abs()
    }
}

impl Abs for f32 {
    #[inline]
    fn abs_value(self) -> Self {
        self.abs()
    }
}

impl Abs for f64 {
    #[inline]
    fn abs_value(self) -> Self {
        self.abs()
    }
}

#[inline]
pub fn abs<T: Abs>(x: T) -> T {
    x.abs_value()
}

/// Common type of a binary operation between `Self` and `Rhs`.
pub trait Promote<Rhs> {
    type Output: PartialOrd;

    fn promote_pair(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

macro_rules! promote_same {
    ($($t:ty),*) => {$(
        impl Promote<$t> for $t {
            type Output = $t;

            #[inline]
            fn promote_pair(self, rhs: $t) -> ($t, $t) {
                (self, rhs)
            }
        }
    )*};
}

promote_same!(i32, u32, i64, u64, f32, f64);

// Same-width signed to unsigned reinterprets the bits, as C does.
impl Promote<u32> for i32 {
    type Output = u32;

    #[inline]
    fn promote_pair(self, rhs: u32) -> (u32, u32) {
        (self as u32, rhs)
    }
}

impl Promote<i32> for u32 {
    type Output = u32;

    #[inline]
    fn promote_pair(self, rhs: i32) -> (u32, u32) {
        (self, rhs as u32)
    }
}

impl Promote<u64> for i64 {
    type Output = u64;

    #[inline]
    fn promote_pair(self, rhs: u64) -> (u64, u64) {
        (self as u64, rhs)
    }
}

impl Promote<i64> for u64 {
    type Output = u64;

    #[inline]
    fn promote_pair(self, rhs: i64) -> (u64, u64) {
        (self, rhs as u64)
    }
}

impl Promote<f64> for f32 {
    type Output = f64;

    #[inline]
    fn promote_pair(self, rhs: f64) -> (f64, f64) {
        (f64::from(self), rhs)
    }
}

impl Promote<f32> for f64 {
    type Output = f64;

    #[inline]
    fn promote_pair(self, rhs: f32) -> (f64, f64) {
        (self, f64::from(rhs))
    }
}

/// `min` after the usual arithmetic conversions.
#[inline]
pub fn min_mixed<A: Promote<B>, B>(a: A, b: B) -> A::Output {
    let (a, b) = a.promote_pair(b);
    min(a, b)
}

/// `max` after the usual arithmetic conversions.
#[inline]
pub fn max_mixed<A: Promote<B>, B>(a: A, b: B) -> A::Output {
    let (a, b) = a.promote_pair(b);
    max(a, b)
}
