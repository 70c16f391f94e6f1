//! Raw FFI bindings to `libanychat_c`: the C surface of the AnyChat native core.
//!
//! All types and functions mirror the C headers under `include/anychat_c/`
//! and are generated by [`bindgen`](https://docs.rs/bindgen). Do not edit manually.
//!
//! # Build
//!
//! The build script (`build.rs`):
//! 1. Adds `ANYCHAT_LIB_DIR` to the native search path and links `anychat_c`
//!    when that variable is set.
//! 2. Optionally runs `bindgen` on `anychat_c.h` (feature `regenerate`).
//! 3. Links the C++ runtime and platform libraries the core depends on.
//!
//! Without `ANYCHAT_LIB_DIR` nothing is linked: the declarations below are
//! available, but calling any of the functions will fail at link time.

// sys crate: unsafe FFI, non-idiomatic generated code
#![allow(
    unsafe_code,
    missing_docs,
    non_camel_case_types,
    non_upper_case_globals,
    non_snake_case,
    clippy::missing_safety_doc,
    clippy::upper_case_acronyms
)]

// When the `regenerate` feature is enabled, use freshly generated bindings.
// Otherwise, use the pre-generated bindings committed in the repository.
#[cfg(feature = "regenerate")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
#[cfg(not(feature = "regenerate"))]
include!("bindings.rs");
