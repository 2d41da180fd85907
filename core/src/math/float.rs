//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the ones the crate needs using either `std` or the `libm` crate,
//! depending on which feature is enabled. Call them through the [`f32`]
//! alias, as in `f32::sqrt(x)`.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::ceilf as ceil;
    pub use libm::fabsf as abs;
    pub use libm::floorf as floor;

    pub use libm::powf;
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;
    pub use libm::tanf as tan;
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use core::f32::consts::*;

    use super::*;
    use crate::assert_approx_eq;

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::floor(1.5), 1.0);
        assert_eq!(libm::floor(-1.1), -2.0);
        assert_eq!(libm::ceil(1.1), 2.0);
        assert_eq!(libm::abs(-2.5), 2.5);

        assert_eq!(libm::sqrt(9.0), 3.0);
        assert!(libm::sqrt(-1.0).is_nan());
        assert_eq!(libm::powf(3.0, 2.0), 9.0);

        assert_approx_eq!(libm::sin(FRAC_PI_6), 0.5);
        assert_eq!(libm::cos(PI), -1.0);
        assert_approx_eq!(libm::tan(FRAC_PI_4), 1.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_functions() {
        assert_eq!(f32::floor(-0.0), 0.0);
        assert_eq!(f32::ceil(0.1), 1.0);
        assert_eq!(f32::sqrt(9.0), 3.0);
        assert!(f32::sqrt(-1.0).is_nan());
        assert_eq!(f32::cos(PI), -1.0);
        assert_approx_eq!(f32::tan(FRAC_PI_4), 1.0);
    }
}
