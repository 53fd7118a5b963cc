// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Deref, DerefMut}};

/// Reveal progress: `0.0` closed, `1.0` fully open. Values above `1.0` occur
/// during elastic overscroll and are deliberately not clamped; the layout law
/// (`to_x * p`) keeps applying so buttons stretch past their resting slots.
///
/// You can use [`crate::progress()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Progress(pub f64);

impl Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Progress({:?})", self.0)
    }
}

pub fn progress(arg_progress: impl Into<Progress>) -> Progress { arg_progress.into() }

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Progress {
        pub fn new(arg_progress: impl Into<Progress>) -> Self { arg_progress.into() }

        #[must_use]
        pub fn as_f64(&self) -> f64 { self.0 }
    }
}

mod impl_from_numeric {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<f64> for Progress {
        fn from(val: f64) -> Self { Progress(val) }
    }

    impl From<Progress> for f64 {
        fn from(it: Progress) -> Self { it.0 }
    }
}

mod impl_deref {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for Progress {
        type Target = f64;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for Progress {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_new() {
        assert_eq!(Progress::new(0.5), progress(0.5));
        assert_eq!(*progress(0.5), 0.5);
    }

    #[test]
    fn test_progress_is_not_clamped() {
        assert_eq!(progress(1.75).as_f64(), 1.75);
    }
}
