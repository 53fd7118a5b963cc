// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, DerefMut, Mul, Neg, Sub}};

/// A horizontal offset measured in fractional terminal columns.
///
/// Two things are measured with this type:
/// - The cell frame offset: `0.0` when the row sits closed, negative while it is
///   dragged or revealed to the left. It never goes positive (see
///   `RevealEngineApi`).
/// - An action button's offset inside its row, which is `>= 0.0` and grows with
///   reveal progress.
///
/// Fractional columns keep damping, velocity projection, and spring
/// interpolation smooth; painting quantizes to whole cells at the last moment.
///
/// You can use [`crate::x_offset()`] to create a new instance.
///
/// # Examples
///
/// ```
/// use r3bl_swipe::{XOffset, x_offset};
/// let it = x_offset(-3.5);
/// let it = XOffset::new(-3.5);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct XOffset(pub f64);

impl Debug for XOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XOffset({:?})", self.0)
    }
}

pub fn x_offset(arg_x_offset: impl Into<XOffset>) -> XOffset { arg_x_offset.into() }

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl XOffset {
        pub fn new(arg_x_offset: impl Into<XOffset>) -> Self { arg_x_offset.into() }

        #[must_use]
        pub fn as_f64(&self) -> f64 { self.0 }

        /// Distance from the closed position, regardless of direction.
        #[must_use]
        pub fn abs(&self) -> f64 { self.0.abs() }

        /// True when this offset is within `threshold` columns of closed.
        #[must_use]
        pub fn is_within_of_closed(&self, threshold: f64) -> bool {
            self.0.abs() <= threshold
        }

        #[must_use]
        pub fn clamp(&self, min: XOffset, max: XOffset) -> XOffset {
            XOffset(self.0.clamp(min.0, max.0))
        }
    }
}

mod impl_from_numeric {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<f64> for XOffset {
        fn from(val: f64) -> Self { XOffset(val) }
    }

    impl From<i32> for XOffset {
        fn from(val: i32) -> Self { XOffset(f64::from(val)) }
    }

    impl From<XOffset> for f64 {
        fn from(it: XOffset) -> Self { it.0 }
    }
}

mod impl_deref {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for XOffset {
        type Target = f64;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for XOffset {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod dimension_arithmetic_operators {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Add<XOffset> for XOffset {
        type Output = XOffset;

        fn add(self, rhs: XOffset) -> Self::Output { XOffset(self.0 + rhs.0) }
    }

    impl AddAssign<XOffset> for XOffset {
        fn add_assign(&mut self, rhs: XOffset) { self.0 += rhs.0; }
    }

    impl Sub<XOffset> for XOffset {
        type Output = XOffset;

        fn sub(self, rhs: XOffset) -> Self::Output { XOffset(self.0 - rhs.0) }
    }

    impl Neg for XOffset {
        type Output = XOffset;

        fn neg(self) -> Self::Output { XOffset(-self.0) }
    }

    /// Scaling by a dimensionless factor (translation damping).
    impl Mul<f64> for XOffset {
        type Output = XOffset;

        fn mul(self, rhs: f64) -> Self::Output { XOffset(self.0 * rhs) }
    }
}
