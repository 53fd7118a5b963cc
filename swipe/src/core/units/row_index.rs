// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, Deref, DerefMut}};

use crate::{ColIndex, Pos};

/// A 0-based terminal row position. See [`ColIndex`] for the composition idiom
/// (`col(x) + row(y)` makes a [`Pos`]).
///
/// You can use [`crate::row()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowIndex(pub u16);

impl Debug for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RowIndex({:?})", self.0)
    }
}

pub fn row(arg_row_index: impl Into<RowIndex>) -> RowIndex { arg_row_index.into() }

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl RowIndex {
        pub fn new(arg_row_index: impl Into<RowIndex>) -> Self { arg_row_index.into() }

        #[must_use]
        pub fn as_u16(&self) -> u16 { self.0 }

        #[must_use]
        pub fn as_usize(&self) -> usize { usize::from(self.0) }
    }
}

mod impl_from_numeric {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<u16> for RowIndex {
        fn from(val: u16) -> Self { RowIndex(val) }
    }

    impl From<usize> for RowIndex {
        fn from(val: usize) -> Self { RowIndex(u16::try_from(val).unwrap_or(u16::MAX)) }
    }

    impl From<i32> for RowIndex {
        fn from(val: i32) -> Self { RowIndex(u16::try_from(val).unwrap_or_default()) }
    }

    impl From<RowIndex> for u16 {
        fn from(row_index: RowIndex) -> Self { row_index.0 }
    }
}

mod impl_deref {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for RowIndex {
        type Target = u16;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for RowIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod position_composition_operators {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Add<ColIndex> for RowIndex {
        type Output = Pos;

        fn add(self, rhs: ColIndex) -> Self::Output {
            Pos {
                col_index: rhs,
                row_index: self,
            }
        }
    }
}
