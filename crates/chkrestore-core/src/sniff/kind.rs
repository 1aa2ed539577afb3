//! Content types recognizable from binary signatures

/// File types the sniffer can identify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    // Images
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    WebP,
    // Documents
    Pdf,
    Docx,
    Xlsx,
    Pptx,
    // Archives
    Zip,
    Rar,
    SevenZip,
    Gzip,
    Bzip2,
    // Audio/video containers
    Mp4,
    Matroska,
    Avi,
    Wav,
    Mp3,
    Flac,
    Ogg,
}

impl FileKind {
    /// The extension appended when a file of this kind is renamed
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tif",
            Self::WebP => "webp",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Pptx => "pptx",
            Self::Zip => "zip",
            Self::Rar => "rar",
            Self::SevenZip => "7z",
            Self::Gzip => "gz",
            Self::Bzip2 => "bz2",
            Self::Mp4 => "mp4",
            Self::Matroska => "mkv",
            Self::Avi => "avi",
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
