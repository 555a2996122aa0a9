// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Go Version Changer Library
//!
//! This library provides the building blocks for updating the local Go
//! toolchain: catalog fetching, version ordering and selection, archive
//! retrieval, and installation via external commands.

// Re-export public API from organized modules
pub mod catalog;
pub mod config;
pub mod download;
pub mod error;
pub mod install;
pub mod platform;
pub mod process;
pub mod prompt;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use catalog::{Release, fetch_stable_versions, stable_versions};
pub use config::{Config, InstallStrategy};
pub use download::{copy_stream, download_archive};
pub use error::UpdateError;
pub use install::Installer;
pub use platform::{GO_CATALOG_URL, GO_DOWNLOAD_BASE, Platform};
pub use process::{CommandRunner, ProcessError, SystemRunner};
pub use prompt::prompt_version;
pub use version::{Selection, compare_versions, extract_go_version, resolve_selection};
