// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for apps embedding the swipe engine. Logs must never hit
//! stdout/stderr while the terminal is in raw mode (they would tear the
//! display), so the display layer is opt-in and file logging is the default
//! for the demo.

use std::path::PathBuf;

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Errors from [`try_initialize_logging()`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LogInitError {
    /// The log file path has no parent directory or no file name component.
    #[error("Log file path {path:?} is not usable")]
    #[diagnostic(
        code(r3bl_swipe::log::bad_path),
        help("Pass a path with both a folder and a file name, e.g. `/tmp/swipe.log`.")
    )]
    BadPath { path: PathBuf },

    /// The global subscriber was already installed by the embedding app.
    #[error("A global tracing subscriber is already set")]
    #[diagnostic(
        code(r3bl_swipe::log::already_set),
        help(
            "Call try_initialize_logging() once, before the embedder installs \
             its own subscriber, or skip it entirely and compose the layers \
             from try_create_file_layer() yourself."
        )
    )]
    SubscriberAlreadySet(#[source] tracing_subscriber::util::TryInitError),
}

/// Initializes global tracing with a level filter taken from `RUST_LOG`
/// (absent ⇒ `INFO`) and an optional file layer appending to `maybe_log_file`.
///
/// # Errors
///
/// Returns [`LogInitError`] if the path is unusable or a subscriber is already
/// installed.
pub fn try_initialize_logging(
    maybe_log_file: Option<&str>,
) -> Result<(), LogInitError> {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let maybe_file_layer = match maybe_log_file {
        Some(path_str) => Some(try_create_file_layer(path_str)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(maybe_file_layer)
        .try_init()
        .map_err(LogInitError::SubscriberAlreadySet)
}

/// Creates a file-writing fmt layer (no ANSI, since log files are read raw).
/// This erases the concrete type of the writer, and returns a boxed layer,
/// which is useful for composition of layers.
///
/// # Errors
///
/// Returns [`LogInitError::BadPath`] if `path_str` lacks a folder or file name.
pub fn try_create_file_layer<S>(
    path_str: &str,
) -> Result<Box<DynLayer<S>>, LogInitError>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let path = PathBuf::from(path_str);

    let parent = path.parent().filter(|it| !it.as_os_str().is_empty());
    let file_stem = path.file_name();

    let (Some(parent), Some(file_stem)) = (parent, file_stem) else {
        return Err(LogInitError::BadPath { path });
    };

    let file = tracing_appender::rolling::never(parent, file_stem);

    Ok(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layer_rejects_bare_file_name_without_folder() {
        let result: Result<Box<DynLayer<tracing_subscriber::Registry>>, _> =
            try_create_file_layer("swipe.log");
        assert!(matches!(result, Err(LogInitError::BadPath { .. })));
    }

    #[test]
    fn test_file_layer_accepts_folder_and_file_name() {
        let dir = std::env::temp_dir().join("r3bl_swipe_log_test");
        std::fs::create_dir_all(&dir).unwrap();
        let file_path = dir.join("swipe.log");
        let file_path = file_path.to_str().unwrap();

        let layer: Result<Box<DynLayer<tracing_subscriber::Registry>>, _> =
            try_create_file_layer(file_path);
        assert!(layer.is_ok());
        assert!(std::path::Path::new(file_path).exists());
    }
}
