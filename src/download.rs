// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Archive retrieval
//!
//! Streams the release archive to the scratch file in fixed-size chunks
//! so the payload is never buffered whole in memory. On any failure the
//! partially written file is left on disk for inspection.

use std::io::{Read, Write};

use crate::error::UpdateError;

/// Download `url` and stream the body into `dest`
///
/// # Errors
/// Returns [`UpdateError::Download`] on transport failure or a
/// non-success status and [`UpdateError::Write`] when writing to `dest`
/// fails. Whatever was already written stays in place.
pub fn download_archive<W: Write>(url: &str, dest: &mut W) -> Result<u64, UpdateError> {
    let resp = attohttpc::get(url)
        .send()
        .and_then(attohttpc::Response::error_for_status)
        .map_err(|e| UpdateError::Download(std::io::Error::other(e)))?;

    let (_status, _headers, mut reader) = resp.split();
    copy_stream(&mut reader, dest)
}

/// Copy `reader` to `writer` in chunks, classifying each side's failure
///
/// Read failures are transport errors ([`UpdateError::Download`]); write
/// failures are local I/O errors ([`UpdateError::Write`]).
pub fn copy_stream<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64, UpdateError> {
    let mut buf = [0u8; 64 * 1024];
    let mut total = 0u64;

    loop {
        let n = reader.read(&mut buf).map_err(UpdateError::Download)?;
        if n == 0 {
            return Ok(total);
        }
        writer.write_all(&buf[..n]).map_err(UpdateError::Write)?;
        total += n as u64;
    }
}
