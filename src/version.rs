// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version comparison and selection for Go toolchain releases
//!
//! This module provides the ordering used for the release list and the
//! validation of an operator's chosen version against that list.

use std::cmp::Ordering;

use crate::error::UpdateError;

/// Compare two dotted version strings in ascending order
///
/// Splits both strings on "." and walks the segments pairwise. At the
/// first index where the segment strings differ, both are parsed as
/// integers (a segment that fails to parse counts as 0, never an error)
/// and their numeric ordering decides the comparison. When every shared
/// segment is equal, the string with more segments orders as newer.
///
/// Equal parsed values at the differing index are a tie; callers must
/// sort stably so tied versions keep their catalog-arrival order.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use gvc::version::compare_versions;
/// assert_eq!(compare_versions("1.21.3", "1.21.10"), Ordering::Less);
/// assert_eq!(compare_versions("1.21", "1.21.0"), Ordering::Less);
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split('.').collect();
    let b_parts: Vec<&str> = b.split('.').collect();

    for (a_part, b_part) in a_parts.iter().zip(b_parts.iter()) {
        if a_part != b_part {
            let a_num = a_part.parse::<u64>().unwrap_or(0);
            let b_num = b_part.parse::<u64>().unwrap_or(0);
            return a_num.cmp(&b_num);
        }
    }

    a_parts.len().cmp(&b_parts.len())
}

/// Outcome of validating the operator's chosen version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The chosen version is already the active toolchain; nothing to do
    AlreadyInstalled,
    /// The chosen version should be downloaded and installed
    Install(String),
}

/// Validate a chosen version against the fetched release list
///
/// The choice must be a member of `versions` exactly as fetched. A choice
/// equal to the currently active version short-circuits to
/// [`Selection::AlreadyInstalled`] without any further side effects.
///
/// # Errors
/// Returns [`UpdateError::InvalidSelection`] when the choice is not in
/// the fetched set.
pub fn resolve_selection(
    versions: &[String],
    choice: &str,
    current: Option<&str>,
) -> Result<Selection, UpdateError> {
    if !versions.iter().any(|v| v == choice) {
        return Err(UpdateError::InvalidSelection(choice.to_string()));
    }

    if current == Some(choice) {
        return Ok(Selection::AlreadyInstalled);
    }

    Ok(Selection::Install(choice.to_string()))
}

/// Extract the bare version number from `go version` output
///
/// Parses output like `go version go1.21.3 linux/amd64` and returns
/// `"1.21.3"`. Returns `None` when no `goN...` token is present.
///
/// # Examples
/// ```
/// use gvc::version::extract_go_version;
/// assert_eq!(
///     extract_go_version("go version go1.21.3 linux/amd64"),
///     Some("1.21.3".to_string())
/// );
/// assert_eq!(extract_go_version("not a version line"), None);
/// ```
pub fn extract_go_version(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .filter_map(|token| token.strip_prefix("go"))
        .find(|rest| rest.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .map(str::to_string)
}
