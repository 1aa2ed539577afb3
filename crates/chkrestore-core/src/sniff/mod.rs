//! Sniffer module: Content-type detection from binary signatures
//!
//! Responsible for reading a bounded prefix of a file and matching it
//! against known magic numbers. Detection never looks at the file name.

mod kind;
mod signatures;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub use kind::FileKind;
pub use signatures::detect;

/// Upper bound on how many bytes `sniff` reads from a file.
///
/// Generous relative to the longest signature in the table; also the window
/// the OOXML refinement scans for entry names.
pub const MAX_SNIFF_LEN: usize = 512;

/// Sniff the content type of the file at `path`.
///
/// Reads at most [`MAX_SNIFF_LEN`] bytes, so arbitrarily large files are
/// cheap to probe. Returns `Ok(None)` when the file is empty or no known
/// signature matches; that is a normal outcome, not an error.
///
/// # Errors
/// Returns an error only when the file cannot be opened or read (permission
/// denied, vanished between discovery and sniffing). Callers are expected to
/// treat that as a per-file condition rather than aborting a batch.
pub fn sniff(path: &Path) -> io::Result<Option<FileKind>> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; MAX_SNIFF_LEN];
    let mut filled = 0;

    // A single read may return short on some filesystems; keep going until
    // the buffer is full or the file ends.
    loop {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 || filled + n == MAX_SNIFF_LEN {
            filled += n;
            break;
        }
        filled += n;
    }

    Ok(detect(&buf[..filled]))
}
