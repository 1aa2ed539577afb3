//! Ordered magic-number table and the matching logic
//!
//! Table order encodes precedence: the first matching signature wins, so
//! specific container sub-types (RIFF-based formats) sit above short or
//! generic magics, and the ZIP local-header magic comes last because OOXML
//! documents are ZIP containers and are refined separately.

use super::FileKind;

/// A binary signature: every `(offset, bytes)` part must match
struct Signature {
    kind: FileKind,
    parts: &'static [(usize, &'static [u8])],
}

const SIGNATURES: &[Signature] = &[
    Signature {
        kind: FileKind::Png,
        parts: &[(0, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])],
    },
    Signature {
        kind: FileKind::Jpeg,
        parts: &[(0, &[0xFF, 0xD8, 0xFF])],
    },
    Signature {
        kind: FileKind::Gif,
        parts: &[(0, b"GIF89a")],
    },
    Signature {
        kind: FileKind::Gif,
        parts: &[(0, b"GIF87a")],
    },
    Signature {
        kind: FileKind::Pdf,
        parts: &[(0, b"%PDF-")],
    },
    // RIFF containers: the chunk type at offset 8 picks the format
    Signature {
        kind: FileKind::WebP,
        parts: &[(0, b"RIFF"), (8, b"WEBP")],
    },
    Signature {
        kind: FileKind::Wav,
        parts: &[(0, b"RIFF"), (8, b"WAVE")],
    },
    Signature {
        kind: FileKind::Avi,
        parts: &[(0, b"RIFF"), (8, b"AVI ")],
    },
    Signature {
        kind: FileKind::Tiff,
        parts: &[(0, &[0x49, 0x49, 0x2A, 0x00])], // little-endian "II*\0"
    },
    Signature {
        kind: FileKind::Tiff,
        parts: &[(0, &[0x4D, 0x4D, 0x00, 0x2A])], // big-endian "MM\0*"
    },
    // ISO base media: brand box follows a 4-byte size field
    Signature {
        kind: FileKind::Mp4,
        parts: &[(4, b"ftyp")],
    },
    Signature {
        kind: FileKind::Matroska,
        parts: &[(0, &[0x1A, 0x45, 0xDF, 0xA3])],
    },
    // RAR v5 magic extends the v4 one, so it must match first
    Signature {
        kind: FileKind::Rar,
        parts: &[(0, &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00])],
    },
    Signature {
        kind: FileKind::Rar,
        parts: &[(0, &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00])],
    },
    Signature {
        kind: FileKind::SevenZip,
        parts: &[(0, &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C])],
    },
    Signature {
        kind: FileKind::Gzip,
        parts: &[(0, &[0x1F, 0x8B])],
    },
    Signature {
        kind: FileKind::Bzip2,
        parts: &[(0, b"BZh")],
    },
    Signature {
        kind: FileKind::Flac,
        parts: &[(0, b"fLaC")],
    },
    Signature {
        kind: FileKind::Ogg,
        parts: &[(0, b"OggS")],
    },
    Signature {
        kind: FileKind::Mp3,
        parts: &[(0, b"ID3")],
    },
    // "BM" alone matches ordinary text; the four reserved bytes at offset 6
    // are zero in every valid BMP header and filter most false positives
    Signature {
        kind: FileKind::Bmp,
        parts: &[(0, b"BM"), (6, &[0x00, 0x00, 0x00, 0x00])],
    },
    Signature {
        kind: FileKind::Zip,
        parts: &[(0, &[0x50, 0x4B, 0x03, 0x04])],
    },
];

/// Match a byte prefix against the signature table.
///
/// Returns `None` for empty buffers or unmatched content. Purely a function
/// of the bytes given; the caller decides how much of the file to supply.
#[must_use]
pub fn detect(buf: &[u8]) -> Option<FileKind> {
    let kind = SIGNATURES
        .iter()
        .find(|sig| sig.parts.iter().all(|&(off, magic)| matches_at(buf, off, magic)))
        .map(|sig| sig.kind)?;

    Some(match kind {
        FileKind::Zip => refine_zip(buf),
        other => other,
    })
}

fn matches_at(buf: &[u8], offset: usize, magic: &[u8]) -> bool {
    buf.len() >= offset + magic.len() && &buf[offset..offset + magic.len()] == magic
}

/// Classify a ZIP container as an OOXML document when possible.
///
/// OOXML packages are ordinary ZIP archives whose entries live under
/// `word/`, `xl/` or `ppt/`. Scanning the sniffed prefix for those entry
/// names is an approximation (the central directory is not parsed); a
/// package whose leading entries carry none of them stays generic `zip`.
fn refine_zip(buf: &[u8]) -> FileKind {
    if contains(buf, b"word/") {
        FileKind::Docx
    } else if contains(buf, b"xl/") {
        FileKind::Xlsx
    } else if contains(buf, b"ppt/") {
        FileKind::Pptx
    } else {
        FileKind::Zip
    }
}

fn contains(buf: &[u8], needle: &[u8]) -> bool {
    buf.windows(needle.len()).any(|window| window == needle)
}
