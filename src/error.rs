// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error taxonomy for the update pipeline
//!
//! Every failure is terminal for the run: there is no retry and no
//! partial-success recovery. Errors are printed to stderr with their
//! cause and mapped to a process exit code.

use thiserror::Error;

use crate::process::ProcessError;

/// All the ways a run can fail
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The catalog endpoint could not be reached or returned a bad status
    #[error("failed to fetch the release catalog: {0}")]
    Fetch(#[source] attohttpc::Error),

    /// The catalog response body was not the expected JSON shape
    #[error("failed to parse the release catalog: {0}")]
    Parse(#[source] serde_json::Error),

    /// The catalog contained no stable releases
    #[error("no stable versions available")]
    NoVersions,

    /// The chosen version is not in the fetched release list
    #[error("invalid version selected: {0}")]
    InvalidSelection(String),

    /// The interactive prompt could not be written or read
    #[error("failed to read the version prompt: {0}")]
    Prompt(#[source] std::io::Error),

    /// Transport failure while retrieving the archive
    #[error("failed to download the archive: {0}")]
    Download(#[source] std::io::Error),

    /// Local I/O failure on the scratch file
    #[error("failed to write the output file: {0}")]
    Write(#[source] std::io::Error),

    /// An external command (tar, mv, rm, go) failed
    #[error("failed to run {command}: {source}")]
    Process {
        command: String,
        #[source]
        source: ProcessError,
    },
}

impl UpdateError {
    /// Map the failure to a process exit code
    ///
    /// Codes distinguish "no versions obtainable" (3) and "bad output
    /// file" (2) from the generic abort (1).
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(_) | Self::Parse(_) | Self::NoVersions => 3,
            Self::Write(_) => 2,
            Self::InvalidSelection(_) | Self::Prompt(_) | Self::Download(_) | Self::Process { .. } => {
                1
            }
        }
    }
}
