//! Build script for anychat-sys.
//!
//! 1. Locates a built `libanychat_c` through `ANYCHAT_LIB_DIR`.
//! 2. Optionally runs `bindgen` to regenerate Rust bindings (feature `regenerate`).
//! 3. Configures the linker for the native library + required system libraries.
//!
//! # Environment variables
//!
//! - `ANYCHAT_LIB_DIR`: Directory containing the built native library. When
//!   unset, no link directives are emitted: the declarations compile, and only
//!   binaries that actually call into the native library need it.
//!
//! - `ANYCHAT_LIB_KIND`: `static` (default) or `dylib`.
//!
//! - `ANYCHAT_UPDATE_BINDINGS`: When set (any value) alongside the `regenerate`
//!   feature, the freshly generated `bindings.rs` is copied back to
//!   `src/bindings.rs` so it can be committed to the repository.

use std::env;
#[cfg(feature = "regenerate")]
use std::fs;
#[cfg(feature = "regenerate")]
use std::path::Path;
use std::path::PathBuf;

/// Library name passed to `rustc-link-lib`.
const LIB_NAME: &str = "anychat_c";

fn main() {
    println!("cargo:rerun-if-env-changed=ANYCHAT_LIB_DIR");
    println!("cargo:rerun-if-env-changed=ANYCHAT_LIB_KIND");
    println!("cargo:rerun-if-env-changed=ANYCHAT_UPDATE_BINDINGS");
    println!("cargo:rerun-if-env-changed=DOCS_RS");

    // docs.rs builds run in a network-isolated sandbox without the native
    // library. The crate still compiles for docs.
    if env::var("DOCS_RS").is_ok() {
        return;
    }

    let target = env::var("TARGET").expect("TARGET not set");

    let Ok(lib_dir) = env::var("ANYCHAT_LIB_DIR") else {
        #[cfg(feature = "regenerate")]
        panic!("the `regenerate` feature needs ANYCHAT_LIB_DIR to locate anychat_c.h");
        #[cfg(not(feature = "regenerate"))]
        return;
    };

    let lib_path = PathBuf::from(&lib_dir);
    println!("cargo:rustc-link-search=native={}", lib_path.display());

    #[cfg(feature = "regenerate")]
    {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
        let header_path = find_header(&lib_path);
        println!("cargo:rerun-if-changed={}", header_path.display());
        generate_bindings(&header_path, &out_dir);
    }

    let kind = env::var("ANYCHAT_LIB_KIND").unwrap_or_else(|_| "static".to_owned());
    link_native_lib(&kind);
    if kind == "static" {
        link_system_libs(&target);
    }
}

/// Emit `cargo:rustc-link-lib={kind}=anychat_c`.
fn link_native_lib(kind: &str) {
    assert!(
        matches!(kind, "static" | "dylib"),
        "ANYCHAT_LIB_KIND must be `static` or `dylib`, got `{kind}`"
    );
    println!("cargo:rustc-link-lib={kind}={LIB_NAME}");
}

/// Link platform-specific system libraries required by the static core
/// (C++ runtime, sqlite, TLS and socket stacks).
fn link_system_libs(target: &str) {
    if target.contains("android") {
        for lib in ["c++_shared", "log", "dl", "m"] {
            println!("cargo:rustc-link-lib=dylib={lib}");
        }
    } else if target.contains("linux") {
        for lib in ["pthread", "dl", "m", "stdc++", "sqlite3", "ssl", "crypto", "curl"] {
            println!("cargo:rustc-link-lib=dylib={lib}");
        }
    } else if target.contains("apple") {
        for framework in ["Security", "CoreFoundation", "SystemConfiguration"] {
            println!("cargo:rustc-link-lib=framework={framework}");
        }
        for lib in ["c++", "sqlite3", "curl"] {
            println!("cargo:rustc-link-lib=dylib={lib}");
        }
    } else if target.contains("windows") {
        for lib in ["ws2_32", "bcrypt", "crypt32", "secur32", "user32"] {
            println!("cargo:rustc-link-lib=dylib={lib}");
        }
    }
}

/// Locate the umbrella C header relative to the library directory.
///
/// Tries:
/// - `{lib_dir}/include/anychat_c/anychat_c.h` (install prefix layout)
/// - `{lib_dir}/anychat_c.h`                   (header alongside the lib)
/// - `{lib_dir}/../../include/anychat_c/anychat_c.h` (`build/<profile>/` layout)
#[cfg(feature = "regenerate")]
fn find_header(lib_dir: &Path) -> PathBuf {
    let candidates = [
        lib_dir.join("include").join("anychat_c").join("anychat_c.h"),
        lib_dir.join("anychat_c.h"),
        lib_dir
            .parent()
            .and_then(Path::parent)
            .map(|p| p.join("include").join("anychat_c").join("anychat_c.h"))
            .unwrap_or_default(),
    ];
    for c in &candidates {
        if c.exists() {
            return c.clone();
        }
    }
    panic!(
        "Cannot find anychat_c.h near ANYCHAT_LIB_DIR={}\nSearched: {:?}",
        lib_dir.display(),
        candidates
    );
}

/// Run `bindgen` on the C header to produce `$OUT_DIR/bindings.rs`.
#[cfg(feature = "regenerate")]
fn generate_bindings(header: &Path, out_dir: &Path) {
    let include_dir = header
        .parent()
        .and_then(Path::parent)
        .expect("header must live under include/anychat_c/");

    let bindings = bindgen::Builder::default()
        .header(header.to_str().expect("path is not valid UTF-8"))
        .clang_arg(format!("-I{}", include_dir.display()))
        .use_core()
        // Only generate bindings for our symbols, not system headers.
        .allowlist_function("anychat_.*")
        .allowlist_type("AnyChat.*")
        .allowlist_var("ANYCHAT_.*")
        // Status codes and enum constants are `int` on the C side.
        .default_macro_constant_type(bindgen::MacroTypeVariation::Signed)
        .derive_debug(true)
        .derive_default(true)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("bindgen failed to generate bindings from anychat_c.h");

    let out_file = out_dir.join("bindings.rs");
    bindings
        .write_to_file(&out_file)
        .expect("Failed to write bindings.rs");

    if env::var("ANYCHAT_UPDATE_BINDINGS").is_ok() {
        let manifest_dir =
            PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
        let committed = manifest_dir.join("src").join("bindings.rs");
        fs::copy(&out_file, &committed).expect("Failed to copy bindings.rs to src/");
        println!(
            "cargo:warning=Updated committed bindings: {}",
            committed.display()
        );
    }
}
