// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Interactive version prompt
//!
//! Reads one line per iteration from an injectable source so tests can
//! drive the loop deterministically. The loop has no retry limit; it is
//! bounded only by the operator answering or closing the stream.

use std::io::{self, BufRead, Write};

/// Prompt until a non-empty line is read
///
/// Writes `Which version?` to `output` on every iteration, reads one
/// line from `input`, and trims surrounding whitespace. Empty and
/// whitespace-only lines re-prompt indefinitely.
///
/// # Errors
/// Returns an error if writing the prompt fails or if `input` reaches
/// end-of-stream before a non-empty line is read.
pub fn prompt_version<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    loop {
        writeln!(output, "Which version?")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a version was entered",
            ));
        }

        let choice = line.trim();
        if !choice.is_empty() {
            return Ok(choice.to_string());
        }
    }
}
