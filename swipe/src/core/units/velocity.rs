// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Deref, DerefMut, Mul, Neg}};

/// A horizontal velocity in fractional terminal columns per second. Negative is
/// leftward (opening direction), positive is rightward.
///
/// You can use [`crate::velocity()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Velocity(pub f64);

impl Debug for Velocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Velocity({:?})", self.0)
    }
}

pub fn velocity(arg_velocity: impl Into<Velocity>) -> Velocity { arg_velocity.into() }

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Velocity {
        pub fn new(arg_velocity: impl Into<Velocity>) -> Self { arg_velocity.into() }

        #[must_use]
        pub fn as_f64(&self) -> f64 { self.0 }

        #[must_use]
        pub fn is_rightward(&self) -> bool { self.0 > 0.0 }
    }
}

mod impl_from_numeric {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<f64> for Velocity {
        fn from(val: f64) -> Self { Velocity(val) }
    }

    impl From<Velocity> for f64 {
        fn from(it: Velocity) -> Self { it.0 }
    }
}

mod impl_deref {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for Velocity {
        type Target = f64;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for Velocity {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod dimension_arithmetic_operators {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Mul<f64> for Velocity {
        type Output = Velocity;

        fn mul(self, rhs: f64) -> Self::Output { Velocity(self.0 * rhs) }
    }

    impl Neg for Velocity {
        type Output = Velocity;

        fn neg(self) -> Self::Output { Velocity(-self.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_direction() {
        assert!(velocity(12.0).is_rightward());
        assert!(!velocity(-12.0).is_rightward());
        assert!(!velocity(0.0).is_rightward());
    }

    #[test]
    fn test_velocity_scaling() {
        assert_eq!(velocity(10.0) * 0.4, velocity(4.0));
    }
}
