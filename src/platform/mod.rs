//! Compile-time choice of OpenBLAS platform configuration.
//!
//! `build.rs` resolves the target OS once and sets the `openblas_os` cfg;
//! [`ACTIVE`] is read straight from it, so nothing is decided at run time.
mod select;

pub use select::{ParsePlatformError, PlatformConfig};

#[cfg(openblas_os = "darwin")]
pub const ACTIVE: PlatformConfig = PlatformConfig::Darwin;
#[cfg(openblas_os = "winnt")]
pub const ACTIVE: PlatformConfig = PlatformConfig::Windows;
#[cfg(openblas_os = "linux")]
pub const ACTIVE: PlatformConfig = PlatformConfig::Linux;
#[cfg(not(any(
    openblas_os = "darwin",
    openblas_os = "winnt",
    openblas_os = "linux"
)))]
pub const ACTIVE: PlatformConfig = PlatformConfig::Unrecognized;

/// The configuration this crate was built with.
pub fn active() -> PlatformConfig {
    tracing::debug!(
        platform = %ACTIVE,
        defines = ?ACTIVE.defines(),
        header = ?ACTIVE.config_header(),
        "openblas platform configuration"
    );
    ACTIVE
}
