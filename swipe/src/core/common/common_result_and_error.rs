// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct. The interaction engine itself recovers from invalid
/// states with no-ops rather than errors; this type covers the few operations
/// that can genuinely fail (setup, misconfiguration).
///
/// # Example
///
/// ```
/// use r3bl_swipe::{CommonError, CommonErrorType, CommonResult};
/// pub fn try_pick(index: usize, len: usize) -> CommonResult<usize> {
///     if index < len {
///         Ok(index)
///     } else {
///         CommonError::new_error_result(
///             CommonErrorType::IndexOutOfBounds,
///             &format!("index {index} >= len {len}"),
///         )
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy)]
pub enum CommonErrorType {
    #[default]
    General,
    InvalidArguments,
    InvalidState,
    InvalidValue,
    ValueOutOfRange,
    IndexOutOfBounds,
    IOError,
    NotFound,
}

/// Implement [`Error`] trait.
impl Error for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    #[allow(clippy::all)]
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }

    /// Only [`CommonError::error_type`] available, and no
    /// [`CommonError::error_message`].
    ///
    /// # Errors
    ///
    /// Always returns an error; this is a constructor for the `Err` variant.
    pub fn new_error_result_with_only_type<T>(
        err_type: CommonErrorType,
    ) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: None,
        }))
    }

    /// Only [`CommonError::error_message`] available, and no
    /// [`CommonError::error_type`].
    ///
    /// # Errors
    ///
    /// Always returns an error; this is a constructor for the `Err` variant.
    pub fn new_error_result_with_only_msg<T>(msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: CommonErrorType::default(),
            error_message: Some(msg.to_string()),
        }))
    }
}
