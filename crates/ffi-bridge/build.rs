use msgbridge_core::{NATIVE_LIB_DIR_VAR, NATIVE_LIB_NAME, NATIVE_LINK_KIND_VAR};
use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=native/msgbridge_native.c");
    println!("cargo:rerun-if-changed=native/msgbridge_native.h");
    println!("cargo:rerun-if-env-changed={NATIVE_LIB_DIR_VAR}");
    println!("cargo:rerun-if-env-changed={NATIVE_LINK_KIND_VAR}");

    // Pure-Rust build: callers bring their own sink
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    // Check for a pre-built library first (packagers ship their own)
    if let Some(lib_dir) = env::var_os(NATIVE_LIB_DIR_VAR) {
        let lib_dir = PathBuf::from(lib_dir);
        if !lib_dir.is_dir() {
            panic!(
                "{NATIVE_LIB_DIR_VAR} points to '{}', which is not a directory",
                lib_dir.display()
            );
        }

        let kind = env::var(NATIVE_LINK_KIND_VAR).unwrap_or_else(|_| "static".to_string());
        if kind != "static" && kind != "dylib" {
            panic!("{NATIVE_LINK_KIND_VAR} must be 'static' or 'dylib', got '{kind}'");
        }

        println!("Using pre-built native library from {}", lib_dir.display());
        println!("cargo:rustc-link-search=native={}", lib_dir.display());
        println!("cargo:rustc-link-lib={kind}={NATIVE_LIB_NAME}");
        return;
    }

    // Build the bundled C library (cc emits the link directives)
    println!("Building native library from source");
    cc::Build::new()
        .file("native/msgbridge_native.c")
        .include("native")
        .warnings(true)
        .compile(NATIVE_LIB_NAME);
}
