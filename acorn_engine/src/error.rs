//! Error types for the Acorn engine
//!
//! This module defines the error types used throughout the engine,
//! including GPU backend failures, initialization, and asset loading.

use std::fmt;

/// Result type for Acorn engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Acorn engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL, Vulkan, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, mesh, handle, etc.)
    InvalidResource(String),

    /// Initialization failed (resource manager, built-in resources)
    InitializationFailed(String),

    /// Image could not be decoded (missing file, corrupt or unsupported data)
    DecodeFailed(String),

    /// Model could not be loaded by the model loader
    ModelLoadFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            Error::ModelLoadFailed(msg) => write!(f, "Model load failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("acorn::Texture", "Upload failed for handle {}", id);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::acorn::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with an `Error::BackendError`
///
/// # Example
///
/// ```ignore
/// engine_bail!("acorn::Texture", "Texture {} is not a cube map", id);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
