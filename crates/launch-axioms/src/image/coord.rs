/// A coordinate component accepted by image reads and writes.
///
/// Integer components are used as-is; float components truncate toward
/// zero, saturate at the `i64` range, and map NaN to 0.
pub trait CoordComponent: Copy {
    fn to_i64(self) -> i64;
}

impl CoordComponent for i32 {
    #[inline]
    fn to_i64(self) -> i64 {
        i64::from(self)
    }
}

impl CoordComponent for f32 {
    #[inline]
    fn to_i64(self) -> i64 {
        // `as` truncates, saturates and sends NaN to 0.
        self as i64
    }
}
