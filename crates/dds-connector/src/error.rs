// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type for the binding layer.
//!
//! Every detected error is surfaced immediately to the direct caller; nothing
//! is retried, buffered, or logged inside the accessor paths.

use thiserror::Error;

/// Errors reported by the binding layer.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// An operation was invoked after the owning connector was disposed. The
    /// check happens before any native call, so a disposed handle is never
    /// passed across the FFI boundary.
    #[error("connector has been disposed")]
    Disposed,

    /// A string- or JSON-returning native call yielded a null pointer. Fatal
    /// to the call; there is nothing to free on this path.
    #[error("native layer failed to return a string")]
    NativeString,

    /// A string argument contains an interior NUL byte and cannot cross the
    /// FFI boundary. Raised before any native call.
    #[error("string contains an interior NUL byte: {0:?}")]
    InvalidString(String),

    /// The native library could not create a connector session from the
    /// given configuration.
    #[error("failed to create connector from configuration `{0}`")]
    Creation(String),

    /// The configuration defines no reader or writer with the given name.
    #[error("no such entity in the connector configuration: `{0}`")]
    EntityNotFound(String),

    /// A blocking wait elapsed without data arriving.
    #[error("wait timed out")]
    Timeout,

    /// The native library reported a failure retcode.
    #[error("native call failed with retcode {0}")]
    Native(i32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConnectorError>;

pub(crate) fn check_retcode(code: i32) -> Result<()> {
    match code {
        crate::native::RETCODE_OK => Ok(()),
        crate::native::RETCODE_TIMEOUT => Err(ConnectorError::Timeout),
        code => Err(ConnectorError::Native(code)),
    }
}

/// Converts a Rust string for the FFI boundary, rejecting interior NULs.
pub(crate) fn to_cstring(s: &str) -> Result<std::ffi::CString> {
    std::ffi::CString::new(s).map_err(|_| ConnectorError::InvalidString(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retcode_mapping() {
        assert!(check_retcode(0).is_ok());
        assert!(matches!(check_retcode(10), Err(ConnectorError::Timeout)));
        assert!(matches!(check_retcode(4), Err(ConnectorError::Native(4))));
    }

    #[test]
    fn test_interior_nul_rejected() {
        let err = to_cstring("bad\0field").unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidString(_)));
        assert!(to_cstring("x").is_ok());
    }
}
