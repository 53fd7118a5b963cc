// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{ColIndex, RowIndex};

/// A position in the terminal, composed from a [`ColIndex`] and a [`RowIndex`]
/// via `col(x) + row(y)`. Pointer events carry one of these.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub col_index: ColIndex,
    pub row_index: RowIndex,
}

impl Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pos({:?}, {:?})", self.col_index, self.row_index)
    }
}

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Pos {
        /// Signed horizontal distance from `origin` to `self`, in columns.
        /// Positive means `self` is to the right of `origin`.
        #[must_use]
        pub fn horizontal_delta_from(&self, origin: Pos) -> f64 {
            self.col_index.as_f64() - origin.col_index.as_f64()
        }

        /// Signed vertical distance from `origin` to `self`, in rows. Positive
        /// means `self` is below `origin`.
        #[must_use]
        pub fn vertical_delta_from(&self, origin: Pos) -> f64 {
            f64::from(self.row_index.as_u16()) - f64::from(origin.row_index.as_u16())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{col, row};

    #[test]
    fn test_horizontal_delta_is_signed() {
        let origin = col(10u16) + row(5u16);
        assert_eq!((col(4u16) + row(5u16)).horizontal_delta_from(origin), -6.0);
        assert_eq!((col(13u16) + row(5u16)).horizontal_delta_from(origin), 3.0);
    }

    #[test]
    fn test_vertical_delta_is_signed() {
        let origin = col(0u16) + row(5u16);
        assert_eq!((col(0u16) + row(2u16)).vertical_delta_from(origin), -3.0);
        assert_eq!((col(0u16) + row(9u16)).vertical_delta_from(origin), 4.0);
    }
}
