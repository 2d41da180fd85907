//! Colors with floating-point channels.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Mul, Sub};

use crate::math::approx::ApproxEq;

/// An RGB color with `f32` channels, nominally in the range [0.0, 1.0].
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Color3f(pub [f32; 3]);

/// An RGBA color with `f32` channels, nominally in the range [0.0, 1.0].
///
/// This is the form in which light and material parameters are given.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Color4f(pub [f32; 4]);

/// Returns a new RGB color with `r`, `g`, and `b` channels.
pub const fn rgb(r: f32, g: f32, b: f32) -> Color3f {
    Color3f([r, g, b])
}

/// Returns a new RGBA color with `r`, `g`, `b`, and `a` channels.
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color4f {
    Color4f([r, g, b, a])
}

/// Returns a gray RGB color with all channels equal to `lum`.
pub const fn gray(lum: f32) -> Color3f {
    rgb(lum, lum, lum)
}

impl Color3f {
    /// Black, (0, 0, 0).
    pub const BLACK: Self = gray(0.0);
    /// White, (1, 1, 1).
    pub const WHITE: Self = gray(1.0);

    pub const fn r(&self) -> f32 {
        self.0[0]
    }
    pub const fn g(&self) -> f32 {
        self.0[1]
    }
    pub const fn b(&self) -> f32 {
        self.0[2]
    }

    /// Returns `self` with an alpha channel of `a` added.
    pub const fn to_rgba(self, a: f32) -> Color4f {
        let [r, g, b] = self.0;
        rgba(r, g, b, a)
    }

    /// Returns `self` with each channel clamped to [0.0, 1.0].
    #[must_use]
    pub fn saturate(self) -> Self {
        Self(self.0.map(|c| c.clamp(0.0, 1.0)))
    }

    /// Returns a `u32` containing the channels of `self` in `0x00_RR_GG_BB`
    /// format, each mapped to `u8` with `(c.clamp(0.0, 1.0) * 255.0) as u8`.
    ///
    /// # Examples
    /// ```
    /// # use polyview_core::math::rgb;
    /// assert_eq!(rgb(1.0, 0.0, 0.5).to_rgb_u32(), 0x00_FF_00_7F);
    /// ```
    pub fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
        u32::from_be_bytes([0x00, r, g, b])
    }
}

impl Color4f {
    pub const fn r(&self) -> f32 {
        self.0[0]
    }
    pub const fn g(&self) -> f32 {
        self.0[1]
    }
    pub const fn b(&self) -> f32 {
        self.0[2]
    }
    pub const fn a(&self) -> f32 {
        self.0[3]
    }

    /// Returns the RGB channels of `self`, discarding alpha.
    pub const fn to_rgb(self) -> Color3f {
        let [r, g, b, _] = self.0;
        rgb(r, g, b)
    }
}

impl Debug for Color3f {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rgb{:?}", self.0)
    }
}

impl Debug for Color4f {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rgba{:?}", self.0)
    }
}

impl ApproxEq<Self, f32> for Color3f {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        <f32 as ApproxEq>::relative_epsilon()
    }
}

/// Channel-wise sum.
impl Add for Color3f {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [r, g, b] = self.0;
        rgb(r + rhs.r(), g + rhs.g(), b + rhs.b())
    }
}

/// Channel-wise difference.
impl Sub for Color3f {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let [r, g, b] = self.0;
        rgb(r - rhs.r(), g - rhs.g(), b - rhs.b())
    }
}

/// Channel-wise product, as used to modulate a material by a light.
impl Mul for Color3f {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let [r, g, b] = self.0;
        rgb(r * rhs.r(), g * rhs.g(), b * rhs.b())
    }
}

impl Mul<f32> for Color3f {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self(self.0.map(|c| c * s))
    }
}
