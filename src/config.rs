// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Process-wide configuration
//!
//! All paths and endpoints live in one struct built at startup and passed
//! explicitly to collaborators, so tests can point the pipeline at
//! alternate locations. Nothing here mutates after start.

use std::path::PathBuf;

use crate::platform::{GO_CATALOG_URL, GO_DOWNLOAD_BASE};

/// How the existing installation is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStrategy {
    /// Move the old installation aside, extract, then remove the backup.
    /// A failed move aborts before anything is unpacked.
    Backup,
    /// Remove the old installation outright, then extract. No rollback
    /// is possible if extraction fails afterwards; accepted risk.
    Destructive,
}

/// Fixed configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint returning the JSON release catalog
    pub catalog_url: String,
    /// Base URL for archive downloads
    pub download_base: String,
    /// Scratch file holding the downloaded archive for the duration of
    /// the run; removed on full success, left behind on any failure
    pub scratch_file: PathBuf,
    /// The live installation directory
    pub install_root: PathBuf,
    /// Directory the archive is extracted into (the archive itself
    /// carries a top-level `go/` entry)
    pub extract_dir: PathBuf,
    /// Transient backup location used by [`InstallStrategy::Backup`]
    pub backup_dir: PathBuf,
    /// Replacement strategy
    pub strategy: InstallStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: GO_CATALOG_URL.to_string(),
            download_base: GO_DOWNLOAD_BASE.to_string(),
            scratch_file: PathBuf::from("go.tar.gz"),
            install_root: PathBuf::from("/usr/local/go"),
            extract_dir: PathBuf::from("/usr/local"),
            backup_dir: PathBuf::from("/usr/local/go-bak"),
            strategy: InstallStrategy::Backup,
        }
    }
}
