// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, Deref, DerefMut}};

use crate::{Pos, RowIndex};

/// A 0-based terminal column position, used for pointer hit-testing and paint
/// targeting. This is a position, not a width.
///
/// You can use [`crate::col()`] to create a new instance, and add a
/// [`RowIndex`] to form a [`Pos`]:
///
/// ```
/// use r3bl_swipe::{col, row};
/// let pos = col(10) + row(5);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColIndex(pub u16);

impl Debug for ColIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColIndex({:?})", self.0)
    }
}

pub fn col(arg_col_index: impl Into<ColIndex>) -> ColIndex { arg_col_index.into() }

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl ColIndex {
        pub fn new(arg_col_index: impl Into<ColIndex>) -> Self { arg_col_index.into() }

        #[must_use]
        pub fn as_u16(&self) -> u16 { self.0 }

        #[must_use]
        pub fn as_usize(&self) -> usize { usize::from(self.0) }

        #[must_use]
        pub fn as_f64(&self) -> f64 { f64::from(self.0) }
    }
}

mod impl_from_numeric {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<u16> for ColIndex {
        fn from(val: u16) -> Self { ColIndex(val) }
    }

    impl From<usize> for ColIndex {
        fn from(val: usize) -> Self { ColIndex(u16::try_from(val).unwrap_or(u16::MAX)) }
    }

    impl From<i32> for ColIndex {
        fn from(val: i32) -> Self {
            ColIndex(u16::try_from(val).unwrap_or_default())
        }
    }

    impl From<ColIndex> for u16 {
        fn from(col_index: ColIndex) -> Self { col_index.0 }
    }
}

mod impl_deref {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for ColIndex {
        type Target = u16;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for ColIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod position_composition_operators {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Add<RowIndex> for ColIndex {
        type Output = Pos;

        fn add(self, rhs: RowIndex) -> Self::Output {
            Pos {
                col_index: self,
                row_index: rhs,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn test_col_index_new() {
        let it = ColIndex::new(5u16);
        assert_eq!(it, col(5u16));
        assert_eq!(*it, 5);
    }

    #[test]
    fn test_col_plus_row_makes_pos() {
        let pos = col(10u16) + row(5u16);
        assert_eq!(pos.col_index, col(10u16));
        assert_eq!(pos.row_index, row(5u16));
    }
}
