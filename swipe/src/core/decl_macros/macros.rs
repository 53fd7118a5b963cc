// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just
/// syntactic sugar that helps having to write `Ok(())` repeatedly at the end of
/// functions that return [`crate::CommonResult`].
///
/// ```
/// use r3bl_swipe::{CommonResult, throws};
/// fn clamp_to_closed(frame_x: &mut f64) -> CommonResult<()> {
///     throws!({
///         if *frame_x > 0.0 {
///             *frame_x = 0.0;
///         }
///     });
/// }
/// ```
#[macro_export]
macro_rules! throws {
  ($it: block) => {{
    $it
    return Ok(())
  }};
  ($it: stmt) => {{
    $it
    return Ok(())
  }};
}

/// Wrap the given block or stmt so that it returns a `Result<$it>`. It is just
/// syntactic sugar that helps having to write `Ok($it)` repeatedly.
///
/// ```ignore
/// throws_with_return!({
///     RevealEngineApplyResponse::Dragged
/// });
/// ```
#[macro_export]
macro_rules! throws_with_return {
    ($it: block) => {{
        return Ok($it);
    }};
    ($it: stmt) => {{
        return Ok($it);
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
