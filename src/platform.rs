// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Platform detection and URL building for Go toolchain archives
//!
//! This module provides functionality for detecting the current platform
//! and building the download URL for a Go release archive from the
//! official download site.

/// Base URL of the Go download site
pub const GO_DOWNLOAD_BASE: &str = "https://go.dev/dl";

/// URL of the release catalog (JSON listing of all published releases)
pub const GO_CATALOG_URL: &str = "https://go.dev/dl/?mode=json&include=all";

/// Represents a target platform for Go toolchain archives
///
/// The name matches the `<os>-<arch>` component of archive filenames on
/// the download site (e.g. `go1.21.3.linux-amd64.tar.gz`).
#[derive(Debug, Clone)]
pub struct Platform {
    /// Archive name component for this platform (e.g. "linux-amd64")
    pub name: &'static str,
}

impl Platform {
    /// Linux x86_64 platform configuration
    pub const LINUX_AMD64: Platform = Platform { name: "linux-amd64" };

    /// Linux ARM64 platform configuration
    pub const LINUX_ARM64: Platform = Platform { name: "linux-arm64" };

    /// macOS x86_64 platform configuration
    pub const DARWIN_AMD64: Platform = Platform {
        name: "darwin-amd64",
    };

    /// macOS ARM64 platform configuration
    pub const DARWIN_ARM64: Platform = Platform {
        name: "darwin-arm64",
    };

    /// Automatically detect the current platform based on OS and architecture
    ///
    /// Falls back to LINUX_AMD64 for unsupported platforms.
    pub fn detect() -> Platform {
        match (std::env::consts::OS, std::env::consts::ARCH) {
            ("linux", "x86_64" | "amd64") => Self::LINUX_AMD64,
            ("linux", "aarch64" | "arm64") => Self::LINUX_ARM64,
            ("macos", "x86_64" | "amd64") => Self::DARWIN_AMD64,
            ("macos", "aarch64" | "arm64") => Self::DARWIN_ARM64,
            // Default fallbacks for known OS with unknown architecture
            ("linux", _) => Self::LINUX_AMD64,
            ("macos", _) => Self::DARWIN_AMD64,
            // Ultimate fallback for unknown OS
            _ => Self::LINUX_AMD64,
        }
    }

    /// Build the archive download URL for a specific version on this platform
    ///
    /// # Arguments
    /// * `base` - Base URL of the download site
    /// * `version` - The Go version to download (e.g. "1.21.3")
    ///
    /// # Returns
    /// Complete URL to the tar.gz archive for this platform
    #[must_use]
    pub fn build_download_url(&self, base: &str, version: &str) -> String {
        format!("{base}/go{version}.{}.tar.gz", self.name)
    }
}
