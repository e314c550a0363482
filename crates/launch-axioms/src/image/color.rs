//! Color interpretations over a common raw texel.
//!
//! All three color types are four 32-bit lanes, so converting between
//! them is a bit-for-bit reinterpretation, never a numeric conversion.

/// The stored element of every image: four 32-bit lanes.
pub type RawTexel = [u32; 4];

/// A typed view of a [`RawTexel`].
pub trait Color: Copy {
    fn from_raw(raw: RawTexel) -> Self;
    fn into_raw(self) -> RawTexel;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Float4(pub [f32; 4]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Int4(pub [i32; 4]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uint4(pub [u32; 4]);

impl Color for Float4 {
    #[inline]
    fn from_raw(raw: RawTexel) -> Self {
        Self(raw.map(f32::from_bits))
    }

    #[inline]
    fn into_raw(self) -> RawTexel {
        self.0.map(f32::to_bits)
    }
}

impl Color for Int4 {
    #[inline]
    fn from_raw(raw: RawTexel) -> Self {
        Self(raw.map(|lane| lane as i32))
    }

    #[inline]
    fn into_raw(self) -> RawTexel {
        self.0.map(|lane| lane as u32)
    }
}

impl Color for Uint4 {
    #[inline]
    fn from_raw(raw: RawTexel) -> Self {
        Self(raw)
    }

    #[inline]
    fn into_raw(self) -> RawTexel {
        self.0
    }
}

impl Color for RawTexel {
    #[inline]
    fn from_raw(raw: RawTexel) -> Self {
        raw
    }

    #[inline]
    fn into_raw(self) -> RawTexel {
        self
    }
}

/// View the bits of one color type as another.
#[inline]
pub fn reinterpret<A: Color, B: Color>(color: A) -> B {
    B::from_raw(color.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_one_reads_as_denormal_float() {
        let f: Float4 = reinterpret(Int4([1, 1, 1, 1]));
        assert_eq!(f.0[0].to_bits(), 1);
        assert_eq!(f.0[0], f32::from_bits(1));
        assert_ne!(f.0[0], 1.0);
    }

    #[test]
    fn test_negative_int_as_uint() {
        let u: Uint4 = reinterpret(Int4([-1, 0, i32::MIN, 7]));
        assert_eq!(u.0, [u32::MAX, 0, 0x8000_0000, 7]);
    }

    #[test]
    fn test_float_bits_preserved() {
        let src = Float4([1.0, -0.0, f32::INFINITY, 0.5]);
        let raw = src.into_raw();
        assert_eq!(raw[0], 0x3F80_0000);
        assert_eq!(raw[1], 0x8000_0000);
        assert_eq!(Float4::from_raw(raw), src);
    }

    #[test]
    fn test_nan_payload_survives() {
        let nan = f32::from_bits(0x7FC0_1234);
        let back: Float4 = reinterpret::<Uint4, Float4>(reinterpret(Float4([nan; 4])));
        assert_eq!(back.0[3].to_bits(), 0x7FC0_1234);
    }
}
