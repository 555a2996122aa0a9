// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release catalog fetching for the Go download site
//!
//! One HTTP GET per run, no caching: the version list is rebuilt from the
//! catalog every time. Only stable releases are kept, with the "go"
//! filename prefix stripped, sorted newest first.

use serde::Deserialize;

use crate::error::UpdateError;
use crate::version::compare_versions;

/// One entry of the remote release catalog, taken verbatim from the JSON
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Version identifier as published (e.g. "go1.21.3")
    pub version: String,
    /// Whether the catalog marks this release as stable
    pub stable: bool,
}

/// Fetch the catalog and return the stable versions, newest first
///
/// # Errors
/// Returns [`UpdateError::Fetch`] if the endpoint cannot be reached or
/// answers with a non-success status, [`UpdateError::Parse`] if the body
/// is not a well-formed release array, and [`UpdateError::NoVersions`]
/// when the catalog holds no stable release at all.
pub fn fetch_stable_versions(catalog_url: &str) -> Result<Vec<String>, UpdateError> {
    let resp = attohttpc::get(catalog_url)
        .send()
        .and_then(attohttpc::Response::error_for_status)
        .map_err(UpdateError::Fetch)?;
    let body = resp.text().map_err(UpdateError::Fetch)?;

    let releases: Vec<Release> = serde_json::from_str(&body).map_err(UpdateError::Parse)?;

    let versions = stable_versions(&releases);
    if versions.is_empty() {
        return Err(UpdateError::NoVersions);
    }

    Ok(versions)
}

/// Filter a release list down to stable versions, sorted newest first
///
/// Strips the "go" prefix from each version string. The sort is stable,
/// so entries the comparator cannot separate keep their catalog order.
#[must_use]
pub fn stable_versions(releases: &[Release]) -> Vec<String> {
    let mut versions: Vec<String> = releases
        .iter()
        .filter(|r| r.stable)
        .map(|r| {
            r.version
                .strip_prefix("go")
                .unwrap_or(&r.version)
                .to_string()
        })
        .collect();

    versions.sort_by(|a, b| compare_versions(b, a));

    versions
}
