//! Clamped image addressing.
//!
//! Maps an image coordinate to a flat index into caller-owned storage
//! and reinterprets the stored texel as a requested color type.
//!
//! - **Clamping**: each coordinate component is snapped into
//!   `0..max` for its axis; out-of-range accesses never fail
//! - **Linearization**: strides are the *maximum* extents from
//!   [`ImageLimits`], not the extents of any particular image, so
//!   `index = y * width_max + x` in 2-D and
//!   `index = (z * height_max + y) * width_max + x` in 3-D
//! - **Reinterpretation**: reads and writes go through [`Color`], a
//!   bit-for-bit view of the raw texel
//!
//! Both [`Addressing::read`] and [`Addressing::write`] clamp.

mod color;
mod coord;
mod store;

pub use color::{Color, Float4, Int4, RawTexel, Uint4, reinterpret};
pub use coord::CoordComponent;
pub use store::{DenseTexels, SparseTexels, TexelStore};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::FlagSet;

// ────────────────────────────────────────────────────────────────────────────
// Capacity constants
// ────────────────────────────────────────────────────────────────────────────

pub const IMAGE1D_MAX_WIDTH_FLAG: &str = "CL_DEVICE_IMAGE1D_MAX_WIDTH";
pub const IMAGE2D_MAX_WIDTH_FLAG: &str = "CL_DEVICE_IMAGE2D_MAX_WIDTH";
pub const IMAGE2D_MAX_HEIGHT_FLAG: &str = "CL_DEVICE_IMAGE2D_MAX_HEIGHT";
pub const IMAGE3D_MAX_WIDTH_FLAG: &str = "CL_DEVICE_IMAGE3D_MAX_WIDTH";
pub const IMAGE3D_MAX_HEIGHT_FLAG: &str = "CL_DEVICE_IMAGE3D_MAX_HEIGHT";
pub const IMAGE3D_MAX_DEPTH_FLAG: &str = "CL_DEVICE_IMAGE3D_MAX_DEPTH";

/// Every flag name [`ImageLimits::from_flags`] reads.
pub const LIMIT_FLAGS: [&str; 6] = [
    IMAGE1D_MAX_WIDTH_FLAG,
    IMAGE2D_MAX_WIDTH_FLAG,
    IMAGE2D_MAX_HEIGHT_FLAG,
    IMAGE3D_MAX_WIDTH_FLAG,
    IMAGE3D_MAX_HEIGHT_FLAG,
    IMAGE3D_MAX_DEPTH_FLAG,
];

/// Per-kind maximum image extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLimits {
    pub image1d_max_width: u32,
    pub image2d_max_width: u32,
    pub image2d_max_height: u32,
    pub image3d_max_width: u32,
    pub image3d_max_height: u32,
    pub image3d_max_depth: u32,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            image1d_max_width: 1 << 27,
            image2d_max_width: 1 << 13,
            image2d_max_height: 1 << 13,
            image3d_max_width: 1 << 9,
            image3d_max_height: 1 << 9,
            image3d_max_depth: 1 << 9,
        }
    }
}

impl ImageLimits {
    /// Defaults, overridden by any `CL_DEVICE_IMAGE*` flags in `flags`.
    ///
    /// An override that is not a positive 32-bit integer is reported
    /// and the default kept. So is any image kind whose extents multiply
    /// past `usize::MAX`: all of that kind's limits fall back together.
    pub fn from_flags(flags: &FlagSet) -> Self {
        let mut limits = Self::default();
        let slots: [(&str, &mut u32); 6] = [
            (IMAGE1D_MAX_WIDTH_FLAG, &mut limits.image1d_max_width),
            (IMAGE2D_MAX_WIDTH_FLAG, &mut limits.image2d_max_width),
            (IMAGE2D_MAX_HEIGHT_FLAG, &mut limits.image2d_max_height),
            (IMAGE3D_MAX_WIDTH_FLAG, &mut limits.image3d_max_width),
            (IMAGE3D_MAX_HEIGHT_FLAG, &mut limits.image3d_max_height),
            (IMAGE3D_MAX_DEPTH_FLAG, &mut limits.image3d_max_depth),
        ];
        for (name, slot) in slots {
            let Some(value) = flags.get(name) else {
                continue;
            };
            match value.as_int().and_then(|n| u32::try_from(n).ok()) {
                Some(n) if n > 0 => *slot = n,
                _ => warn!(flag = name, ?value, default = *slot, "ignoring invalid image limit"),
            }
        }

        let defaults = Self::default();
        if extent_product(limits.extent2d()).is_none() {
            warn!(
                extent = ?limits.extent2d(),
                "2-D image limits overflow the index range, using defaults"
            );
            limits.image2d_max_width = defaults.image2d_max_width;
            limits.image2d_max_height = defaults.image2d_max_height;
        }
        if extent_product(limits.extent3d()).is_none() {
            warn!(
                extent = ?limits.extent3d(),
                "3-D image limits overflow the index range, using defaults"
            );
            limits.image3d_max_width = defaults.image3d_max_width;
            limits.image3d_max_height = defaults.image3d_max_height;
            limits.image3d_max_depth = defaults.image3d_max_depth;
        }
        limits
    }

    #[must_use]
    pub fn extent1d(&self) -> [u32; 1] {
        [self.image1d_max_width]
    }

    #[must_use]
    pub fn extent2d(&self) -> [u32; 2] {
        [self.image2d_max_width, self.image2d_max_height]
    }

    #[must_use]
    pub fn extent3d(&self) -> [u32; 3] {
        [
            self.image3d_max_width,
            self.image3d_max_height,
            self.image3d_max_depth,
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Addressing
// ────────────────────────────────────────────────────────────────────────────

/// Snap `v` into `0..max`: 0 below the range, `max - 1` above it.
#[inline]
#[must_use]
pub fn clamp(v: i64, max: u32) -> u32 {
    if v < 0 {
        0
    } else if v >= i64::from(max) {
        max.saturating_sub(1)
    } else {
        v as u32
    }
}

/// Number of texels spanned by `extent`, `None` if it exceeds `usize`.
#[must_use]
pub fn extent_product<const N: usize>(extent: [u32; N]) -> Option<usize> {
    extent
        .iter()
        .try_fold(1usize, |acc, &e| acc.checked_mul(e as usize))
}

/// Row-major flat index of an in-range coordinate, axis 0 fastest.
#[inline]
#[must_use]
pub fn linearize<const N: usize>(coord: [u32; N], extent: [u32; N]) -> usize {
    (0..N)
        .rev()
        .fold(0usize, |index, d| index * extent[d] as usize + coord[d] as usize)
}

/// Clamped addressing for images of rank `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addressing<const N: usize> {
    extent: [u32; N],
}

pub type Image1d = Addressing<1>;
pub type Image2d = Addressing<2>;
pub type Image3d = Addressing<3>;

impl<const N: usize> Addressing<N> {
    /// Addressing over `extent`. A zero extent is treated as 1.
    ///
    /// When the product of the extents would exceed `usize::MAX`, later
    /// axes are capped to the room the earlier ones leave, so every index
    /// stays below [`capacity`](Self::capacity).
    #[must_use]
    pub fn new(extent: [u32; N]) -> Self {
        let mut room = usize::MAX;
        Self {
            extent: extent.map(|e| {
                let fitted = (e.max(1) as usize).min(room);
                room /= fitted;
                fitted as u32
            }),
        }
    }

    #[must_use]
    pub fn extent(&self) -> [u32; N] {
        self.extent
    }

    /// Number of distinct indices this addressing produces.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.extent.iter().map(|&e| e as usize).product()
    }

    /// Clamp every component of `coord` and linearize.
    #[must_use]
    pub fn index<T: CoordComponent>(&self, coord: [T; N]) -> usize {
        let clamped = std::array::from_fn(|d| clamp(coord[d].to_i64(), self.extent[d]));
        linearize(clamped, self.extent)
    }

    /// Read the texel at the clamped `coord` as color `C`.
    pub fn read<C, S, T>(&self, store: &S, coord: [T; N]) -> C
    where
        C: Color,
        S: TexelStore + ?Sized,
        T: CoordComponent,
    {
        C::from_raw(store.load(self.index(coord)))
    }

    /// Store `color` at the clamped `coord`.
    pub fn write<C, S, T>(&self, store: &mut S, coord: [T; N], color: C)
    where
        C: Color,
        S: TexelStore + ?Sized,
        T: CoordComponent,
    {
        store.store(self.index(coord), color.into_raw());
    }
}

impl Image1d {
    #[must_use]
    pub fn image1d(limits: &ImageLimits) -> Self {
        Self::new(limits.extent1d())
    }
}

impl Image2d {
    #[must_use]
    pub fn image2d(limits: &ImageLimits) -> Self {
        Self::new(limits.extent2d())
    }
}

impl Image3d {
    #[must_use]
    pub fn image3d(limits: &ImageLimits) -> Self {
        Self::new(limits.extent3d())
    }
}
