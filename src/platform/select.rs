//! OS detection for the OpenBLAS configuration.
//!
//! Shared with `build.rs`, so it may only use crates that are also build
//! dependencies.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which OS-specific OpenBLAS configuration a build uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformConfig {
    Darwin,
    Windows,
    Linux,
    /// no OS-specific configuration; the build warns and carries on
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform configuration `{0}` (expected darwin, winnt or linux)")]
pub struct ParsePlatformError(pub String);

const DARWIN_TARGETS: &[&str] = &["macos", "ios", "tvos", "watchos", "visionos"];
const WINDOWS_TARGETS: &[&str] = &["windows"];
// android also defines __linux__
const LINUX_TARGETS: &[&str] = &["linux", "android"];

impl PlatformConfig {
    /// Picks the configuration for a `target_os` value. Darwin is checked
    /// first, then Windows, then Linux.
    pub fn select(target_os: &str) -> PlatformConfig {
        if DARWIN_TARGETS.contains(&target_os) {
            PlatformConfig::Darwin
        } else if WINDOWS_TARGETS.contains(&target_os) {
            PlatformConfig::Windows
        } else if LINUX_TARGETS.contains(&target_os) {
            PlatformConfig::Linux
        } else {
            PlatformConfig::Unrecognized
        }
    }

    /// Value of the `openblas_os` cfg emitted for this configuration.
    pub fn cfg_value(self) -> Option<&'static str> {
        match self {
            PlatformConfig::Darwin => Some("darwin"),
            PlatformConfig::Windows => Some("winnt"),
            PlatformConfig::Linux => Some("linux"),
            PlatformConfig::Unrecognized => None,
        }
    }

    /// Preprocessor symbols this branch defines for OpenBLAS.
    pub fn defines(self) -> &'static [&'static str] {
        match self {
            PlatformConfig::Darwin => &["OPENBLAS_OS_DARWIN"],
            PlatformConfig::Windows => &["OPENBLAS_OS_WINNT"],
            PlatformConfig::Linux => &["OPENBLAS_OS_LINUX"],
            PlatformConfig::Unrecognized => &[],
        }
    }

    /// OS-specific configuration fragment to include. Darwin links the
    /// system Accelerate framework and needs none.
    pub fn config_header(self) -> Option<&'static str> {
        match self {
            PlatformConfig::Windows => Some("openblas_config_windows.h"),
            PlatformConfig::Linux => Some("openblas_config_linux.h"),
            PlatformConfig::Darwin | PlatformConfig::Unrecognized => None,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != PlatformConfig::Unrecognized
    }
}

impl fmt::Display for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cfg_value().unwrap_or("unrecognized"))
    }
}

impl FromStr for PlatformConfig {
    type Err = ParsePlatformError;

    /// Parses a cfg value (`darwin`, `winnt`, `linux`) or `unrecognized`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "darwin" => Ok(PlatformConfig::Darwin),
            "winnt" | "windows" => Ok(PlatformConfig::Windows),
            "linux" => Ok(PlatformConfig::Linux),
            "unrecognized" => Ok(PlatformConfig::Unrecognized),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}
