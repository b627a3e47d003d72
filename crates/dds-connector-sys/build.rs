// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=DDSCONNECTOR_LIB_DIR");

    // The native library ships with the vendor runtime and is not present on
    // build machines by default. Link directives are only emitted when the
    // caller tells us where the library lives; everything else (including the
    // unit tests, which stub the native layer) builds without it.
    if let Ok(dir) = env::var("DDSCONNECTOR_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
        println!("cargo:rustc-link-lib=dylib=ddsconnector");
    }
}
