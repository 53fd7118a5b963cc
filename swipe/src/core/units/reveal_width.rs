// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, DerefMut, Mul, Sub}};

use crate::{Progress, XOffset, x_offset};

/// A horizontal extent measured in fractional terminal columns: the width of a
/// single action button, or the total reveal width of an actions row (the sum
/// of its button widths).
///
/// This is a magnitude and stays `>= 0.0`; the corresponding fully-open cell
/// offset is its negation, see [`RevealWidth::convert_to_open_offset`].
///
/// You can use [`crate::reveal_width()`] to create a new instance.
///
/// # Examples
///
/// ```
/// use r3bl_swipe::{RevealWidth, reveal_width};
/// let it = reveal_width(14.0);
/// let it = RevealWidth::new(14.0);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct RevealWidth(pub f64);

impl Debug for RevealWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RevealWidth({:?})", self.0)
    }
}

pub fn reveal_width(arg_reveal_width: impl Into<RevealWidth>) -> RevealWidth {
    arg_reveal_width.into()
}

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl RevealWidth {
        pub fn new(arg_reveal_width: impl Into<RevealWidth>) -> Self {
            arg_reveal_width.into()
        }

        /// The cell frame offset at which this width is fully revealed, i.e.
        /// the cell slid left by exactly this many columns.
        #[must_use]
        pub fn convert_to_open_offset(&self) -> XOffset { x_offset(-self.0) }

        #[must_use]
        pub fn as_f64(&self) -> f64 { self.0 }

        /// Round up to whole terminal cells for painting.
        #[must_use]
        pub fn as_cells(&self) -> u16 {
            debug_assert!(self.0 >= 0.0);
            let cells = self.0.ceil();
            if cells >= f64::from(u16::MAX) {
                u16::MAX
            } else {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    cells as u16
                }
            }
        }
    }
}

mod impl_from_numeric {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<f64> for RevealWidth {
        fn from(val: f64) -> Self { RevealWidth(val) }
    }

    impl From<u16> for RevealWidth {
        fn from(val: u16) -> Self { RevealWidth(f64::from(val)) }
    }

    impl From<i32> for RevealWidth {
        fn from(val: i32) -> Self { RevealWidth(f64::from(val)) }
    }

    impl From<RevealWidth> for f64 {
        fn from(it: RevealWidth) -> Self { it.0 }
    }
}

mod impl_deref {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for RevealWidth {
        type Target = f64;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for RevealWidth {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod dimension_arithmetic_operators {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Add<RevealWidth> for RevealWidth {
        type Output = RevealWidth;

        fn add(self, rhs: RevealWidth) -> Self::Output { RevealWidth(self.0 + rhs.0) }
    }

    impl AddAssign<RevealWidth> for RevealWidth {
        fn add_assign(&mut self, rhs: RevealWidth) { self.0 += rhs.0; }
    }

    impl Sub<RevealWidth> for RevealWidth {
        type Output = RevealWidth;

        fn sub(self, rhs: RevealWidth) -> Self::Output { RevealWidth(self.0 - rhs.0) }
    }

    impl Mul<f64> for RevealWidth {
        type Output = RevealWidth;

        fn mul(self, rhs: f64) -> Self::Output { RevealWidth(self.0 * rhs) }
    }

    /// The parallel-reveal law: a button whose resting position is this width
    /// away from the row's leading edge sits at `width * progress` during the
    /// reveal.
    impl Mul<Progress> for RevealWidth {
        type Output = XOffset;

        fn mul(self, rhs: Progress) -> Self::Output { x_offset(self.0 * rhs.as_f64()) }
    }
}
