//! Build script for faddeeva-ffi
//!
//! Selects the OpenBLAS platform configuration for the target OS and exposes
//! it to the crate as `cfg(openblas_os = "...")`. Unknown targets build
//! without one, with a warning.
use std::env;

#[allow(dead_code)]
#[path = "src/platform/select.rs"]
mod select;

use select::PlatformConfig;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/platform/select.rs");
    println!("cargo:rustc-check-cfg=cfg(openblas_os, values(\"darwin\", \"winnt\", \"linux\"))");

    // the target, not the host running this script
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let config = PlatformConfig::select(&target_os);

    match config.cfg_value() {
        Some(value) => println!("cargo:rustc-cfg=openblas_os=\"{}\"", value),
        None => println!(
            "cargo:warning=Unsupported platform `{}`: building without an OS-specific OpenBLAS configuration",
            target_os
        ),
    }

    if env::var_os("CARGO_FEATURE_OPENBLAS_SYSTEM").is_some() && config == PlatformConfig::Darwin {
        println!("cargo:warning=openblas-system on Darwin: prefer the Accelerate framework");
    }
}
