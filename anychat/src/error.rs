#![allow(unsafe_code)]
//! Unified error types for the AnyChat SDK.
//!
//! Native status codes and asynchronous callback failures are both run
//! through [`Error::from_native`], so a caller cannot tell whether an
//! operation failed before or after the native core accepted it.

use std::ffi::CStr;

use anychat_sys as sys;

use crate::native::Native;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fieldless classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A parameter was rejected (native code 1).
    InvalidParam,
    /// Authentication failed (native code 2).
    AuthFailure,
    /// Transport or server failure (native code 3).
    NetworkFailure,
    /// The native core gave up waiting (native code 4), or a local timeout elapsed.
    Timeout,
    /// The referenced entity does not exist (native code 5).
    NotFound,
    /// The entity already exists (native code 6).
    AlreadyExists,
    /// Native internal failure or an unconvertible payload (native code 7).
    InternalFault,
    /// The operation needs a logged-in session (native code 8).
    NotLoggedIn,
    /// The session token expired (native code 9).
    TokenExpired,
    /// Bridge-local inconsistency: destroyed client, abandoned or duplicate resolution.
    InvalidState,
    /// The native client could not be created.
    Initialization,
    /// A status code outside the known table.
    Unknown,
}

impl ErrorKind {
    /// Classify a native status code. `0` is the success sentinel and yields `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            sys::ANYCHAT_OK => return None,
            sys::ANYCHAT_ERROR_INVALID_PARAM => Self::InvalidParam,
            sys::ANYCHAT_ERROR_AUTH => Self::AuthFailure,
            sys::ANYCHAT_ERROR_NETWORK => Self::NetworkFailure,
            sys::ANYCHAT_ERROR_TIMEOUT => Self::Timeout,
            sys::ANYCHAT_ERROR_NOT_FOUND => Self::NotFound,
            sys::ANYCHAT_ERROR_ALREADY_EXISTS => Self::AlreadyExists,
            sys::ANYCHAT_ERROR_INTERNAL => Self::InternalFault,
            sys::ANYCHAT_ERROR_NOT_LOGGED_IN => Self::NotLoggedIn,
            sys::ANYCHAT_ERROR_TOKEN_EXPIRED => Self::TokenExpired,
            _ => Self::Unknown,
        })
    }

    /// The shared native status code for this kind.
    ///
    /// Bridge-local kinds (`InvalidState`, `Initialization`) and `Unknown`
    /// have no fixed code.
    #[must_use]
    pub const fn code(self) -> Option<i32> {
        match self {
            Self::InvalidParam => Some(sys::ANYCHAT_ERROR_INVALID_PARAM),
            Self::AuthFailure => Some(sys::ANYCHAT_ERROR_AUTH),
            Self::NetworkFailure => Some(sys::ANYCHAT_ERROR_NETWORK),
            Self::Timeout => Some(sys::ANYCHAT_ERROR_TIMEOUT),
            Self::NotFound => Some(sys::ANYCHAT_ERROR_NOT_FOUND),
            Self::AlreadyExists => Some(sys::ANYCHAT_ERROR_ALREADY_EXISTS),
            Self::InternalFault => Some(sys::ANYCHAT_ERROR_INTERNAL),
            Self::NotLoggedIn => Some(sys::ANYCHAT_ERROR_NOT_LOGGED_IN),
            Self::TokenExpired => Some(sys::ANYCHAT_ERROR_TOKEN_EXPIRED),
            Self::InvalidState | Self::Initialization | Self::Unknown => None,
        }
    }
}

/// Top-level error type for the AnyChat SDK.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A parameter was rejected before or by the native core.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    AuthFailure(String),

    /// Transport or server failure.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The operation timed out.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The entity already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Native internal failure, or a native payload that could not be converted.
    #[error("internal fault: {0}")]
    InternalFault(String),

    /// The operation needs a logged-in session.
    #[error("not logged in: {0}")]
    NotLoggedIn(String),

    /// The session token expired.
    #[error("token expired: {0}")]
    TokenExpired(String),

    /// Bridge-local inconsistency (destroyed client, abandoned operation).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The native client could not be created.
    #[error("client initialization failed: {0}")]
    Initialization(String),

    /// A native status code outside the known table.
    #[error("native error {code}: {message}")]
    Unknown {
        /// Raw native status code.
        code: i32,
        /// Message reported alongside the code.
        message: String,
    },
}

impl Error {
    /// Build an error of the given kind. `Unknown` carries code `-1`.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::InvalidParam => Self::InvalidParam(message),
            ErrorKind::AuthFailure => Self::AuthFailure(message),
            ErrorKind::NetworkFailure => Self::NetworkFailure(message),
            ErrorKind::Timeout => Self::Timeout(message),
            ErrorKind::NotFound => Self::NotFound(message),
            ErrorKind::AlreadyExists => Self::AlreadyExists(message),
            ErrorKind::InternalFault => Self::InternalFault(message),
            ErrorKind::NotLoggedIn => Self::NotLoggedIn(message),
            ErrorKind::TokenExpired => Self::TokenExpired(message),
            ErrorKind::InvalidState => Self::InvalidState(message),
            ErrorKind::Initialization => Self::Initialization(message),
            ErrorKind::Unknown => Self::Unknown { code: -1, message },
        }
    }

    /// Classify a native failure status and its message.
    ///
    /// Codes outside `1..=9` (including a misreported `0`) become
    /// [`Error::Unknown`] carrying the raw code.
    #[must_use]
    pub fn from_native(code: i32, message: impl Into<String>) -> Self {
        let message = message.into();
        match ErrorKind::from_code(code) {
            Some(ErrorKind::Unknown) | None => Self::Unknown { code, message },
            Some(kind) => Self::new(kind, message),
        }
    }

    /// The fieldless kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParam(_) => ErrorKind::InvalidParam,
            Self::AuthFailure(_) => ErrorKind::AuthFailure,
            Self::NetworkFailure(_) => ErrorKind::NetworkFailure,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::InternalFault(_) => ErrorKind::InternalFault,
            Self::NotLoggedIn(_) => ErrorKind::NotLoggedIn,
            Self::TokenExpired(_) => ErrorKind::TokenExpired,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::Initialization(_) => ErrorKind::Initialization,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// The native status code, when the error carries one.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        match self {
            Self::Unknown { code, .. } => Some(*code),
            other => other.kind().code(),
        }
    }

    /// The message reported with the error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidParam(m)
            | Self::AuthFailure(m)
            | Self::NetworkFailure(m)
            | Self::Timeout(m)
            | Self::NotFound(m)
            | Self::AlreadyExists(m)
            | Self::InternalFault(m)
            | Self::NotLoggedIn(m)
            | Self::TokenExpired(m)
            | Self::InvalidState(m)
            | Self::Initialization(m)
            | Self::Unknown { message: m, .. } => m,
        }
    }

    pub(crate) fn destroyed() -> Self {
        Self::InvalidState("client has been destroyed".into())
    }
}

/// Read the native last-error message for the calling thread.
pub(crate) fn last_error(native: &dyn Native) -> String {
    let ptr = unsafe { native.get_last_error() };
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

/// Classify a synchronous native status. `0` = success.
pub(crate) fn check(native: &dyn Native, rc: i32) -> Result<()> {
    if rc == sys::ANYCHAT_OK {
        return Ok(());
    }
    let mut message = last_error(native);
    if message.is_empty() {
        message = format!("native call failed with status {rc}");
    }
    Err(Error::from_native(rc, message))
}
