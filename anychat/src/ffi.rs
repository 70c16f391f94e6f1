#![allow(unsafe_code)]
//! Internal FFI utilities: C string helpers, fixed-size buffer codecs and
//! the panic guard every native callback runs under.

use std::any::Any;
use std::ffi::{CStr, CString, c_char, c_int};
use std::panic::{self, AssertUnwindSafe};
use std::{ptr, slice};

use crate::error::{Error, Result};

/// Convert `&str` to `CString` for FFI.
pub(crate) fn to_c_string(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| Error::InvalidParam("string contains NUL".into()))
}

/// Convert optional `&str` to optional `CString`.
pub(crate) fn optional_c_string(s: Option<&str>) -> Result<Option<CString>> {
    s.map(to_c_string).transpose()
}

/// Get pointer from an optional `CString` (null if `None`).
pub(crate) fn c_str_ptr(opt: &Option<CString>) -> *const c_char {
    opt.as_ref().map_or(ptr::null(), |c| c.as_ptr())
}

/// Convert a slice of strings to a C string array for FFI.
///
/// The returned `Vec<CString>` owns the storage and must outlive the pointers.
pub(crate) fn to_c_string_array<S: AsRef<str>>(
    strings: &[S],
) -> Result<(Vec<CString>, Vec<*const c_char>)> {
    let owned: Vec<CString> = strings
        .iter()
        .map(|s| to_c_string(s.as_ref()))
        .collect::<Result<_>>()?;
    let ptrs = owned.iter().map(|c| c.as_ptr()).collect();
    Ok((owned, ptrs))
}

/// Array length as the native `int`.
pub(crate) fn c_len(len: usize) -> Result<c_int> {
    c_int::try_from(len).map_err(|_| Error::InvalidParam(format!("{len} elements exceed the native limit")))
}

/// A count or page argument as the native `int`.
pub(crate) fn c_count(name: &str, value: u32) -> Result<c_int> {
    c_int::try_from(value).map_err(|_| Error::InvalidParam(format!("{name} {value} is out of range")))
}

/// Read a **borrowed** C string. `None` for null; invalid UTF-8 is an internal fault.
pub(crate) unsafe fn borrowed_str(ptr: *const c_char) -> Result<Option<String>> {
    if ptr.is_null() {
        return Ok(None);
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map(|s| Some(s.to_owned()))
        .map_err(|_| Error::InternalFault("invalid UTF-8 in native string".into()))
}

/// Read a borrowed native error message, lossily, falling back to `default`.
pub(crate) unsafe fn error_message(ptr: *const c_char, default: &str) -> String {
    if ptr.is_null() {
        return default.to_owned();
    }
    let message = unsafe { CStr::from_ptr(ptr) }.to_string_lossy();
    if message.is_empty() {
        default.to_owned()
    } else {
        message.into_owned()
    }
}

/// Read a fixed-size `char[N]` field.
///
/// Stops at the first NUL, or takes the whole buffer when none is present.
pub(crate) fn read_fixed<const N: usize>(buf: &[c_char; N]) -> Result<String> {
    let bytes = unsafe { slice::from_raw_parts(buf.as_ptr().cast::<u8>(), N) };
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(N);
    std::str::from_utf8(&bytes[..end])
        .map(str::to_owned)
        .map_err(|_| Error::InternalFault(format!("invalid UTF-8 in char[{N}] field")))
}

/// Like [`read_fixed`], mapping an empty field to `None`.
pub(crate) fn read_fixed_opt<const N: usize>(buf: &[c_char; N]) -> Result<Option<String>> {
    read_fixed(buf).map(|s| (!s.is_empty()).then_some(s))
}

/// Write `value` into a fixed-size `char[N]` field.
///
/// Keeps at most `N - 1` bytes, cut back to a UTF-8 character boundary, and
/// always NUL-terminates.
pub(crate) fn write_fixed<const N: usize>(value: &str) -> Result<[c_char; N]> {
    if value.contains('\0') {
        return Err(Error::InvalidParam("string contains NUL".into()));
    }
    let mut end = value.len().min(N.saturating_sub(1));
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out: [c_char; N] = [0; N];
    for (dst, &b) in out.iter_mut().zip(&value.as_bytes()[..end]) {
        *dst = c_char::from_ne_bytes([b]);
    }
    Ok(out)
}

/// Native `int` flag to `bool`.
#[inline]
pub(crate) const fn flag(v: c_int) -> bool {
    v != 0
}

/// `bool` to native `int` flag.
#[inline]
pub(crate) fn to_flag(b: bool) -> c_int {
    c_int::from(b)
}

/// Run a native callback body, keeping any panic from unwinding into C.
pub(crate) fn catch_panic(context: &'static str, f: impl FnOnce()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        tracing::error!(context, panic = %panic_to_string(payload.as_ref()), "panic caught in native callback");
    }
}

fn panic_to_string(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
