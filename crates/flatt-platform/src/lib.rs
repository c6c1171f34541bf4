//! Derives the platform key used to select a staged binary variant.
//!
//! Release archives stage one directory per platform, named
//! `{os-family}-{arch}`, next to the launcher executable. This crate turns a
//! pair of raw host identifiers into that directory name plus the
//! platform-specific executable suffix. The derivation is a pure function of
//! the identifiers so tests can inject arbitrary descriptors instead of
//! reading process-wide globals.

use std::env;
use std::fmt;

/// Raw host identifiers a [`PlatformKey`] is derived from.
///
/// The OS identifier is kept verbatim, version digits and all; normalisation
/// happens in [`HostPlatform::resolve`]. Construct with
/// [`HostPlatform::current`] for the running host or [`HostPlatform::new`]
/// for an injected descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    os: String,
    arch: String,
}

impl HostPlatform {
    /// Builds a descriptor from explicit OS and architecture identifiers.
    #[must_use]
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Describes the running host using the identifiers baked in at compile
    /// time (`std::env::consts`).
    #[must_use]
    pub fn current() -> Self {
        Self::new(env::consts::OS, env::consts::ARCH)
    }

    /// Derives the platform key for this descriptor.
    ///
    /// The OS family is the raw identifier with every ASCII digit removed,
    /// collapsing version-suffixed names (`linux5`, `win32`) to a stable
    /// family name. The architecture is taken verbatim. This cannot fail:
    /// an unrecognised host yields a key whose directory simply does not
    /// exist in the staged layout, which callers surface as a missing-binary
    /// condition.
    #[must_use]
    pub fn resolve(&self) -> PlatformKey {
        let family: String = self.os.chars().filter(|c| !c.is_ascii_digit()).collect();
        let suffix = if self.is_windows_family() { ".exe" } else { "" };
        PlatformKey {
            id: format!("{family}-{}", self.arch),
            suffix,
        }
    }

    /// Matches both `win32`-style identifiers and Rust's `windows`.
    fn is_windows_family(&self) -> bool {
        self.os.starts_with("win")
    }
}

/// Stable key selecting one staged binary variant.
///
/// Immutable once derived; holds the `{os-family}-{arch}` directory name and
/// the executable filename suffix for the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformKey {
    id: String,
    suffix: &'static str,
}

impl PlatformKey {
    /// The `{os-family}-{arch}` identifier naming the variant directory.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `".exe"` on the Windows family, empty everywhere else.
    #[must_use]
    pub const fn executable_suffix(&self) -> &'static str {
        self.suffix
    }

    /// Filename of `tool` within the variant directory.
    #[must_use]
    pub fn executable_name(&self, tool: &str) -> String {
        format!("{tool}{}", self.suffix)
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.id)
    }
}
