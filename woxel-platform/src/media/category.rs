//! Coarse file classification for browser views.
//!
//! Categories drive which thumbnail path a file takes and which generic
//! icon stands in when no thumbnail exists. Classification prefers a MIME
//! hint from the resolver, then the extension, then magic bytes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Semantic class of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileCategory {
    Images,
    Videos,
    Audio,
    Documents,
    Archives,
    Package,
    Code,
    Others,
}

impl FileCategory {
    /// Classifies `path`, preferring `mime_hint` when the caller already
    /// resolved one.
    pub fn detect(path: &Path, mime_hint: Option<&str>) -> Self {
        if let Some(hint) = mime_hint {
            let mime = hint.to_lowercase();
            if mime.starts_with("image/") {
                return Self::Images;
            }
            if mime.starts_with("video/") {
                return Self::Videos;
            }
            if mime.starts_with("audio/") {
                return Self::Audio;
            }
            if mime == "application/vnd.android.package-archive" {
                return Self::Package;
            }
            if mime == "application/pdf" || mime.contains("document") {
                return Self::Documents;
            }
        }

        if let Some(ext) = path.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            if let Some(category) = category_for_extension(&ext) {
                return category;
            }
        }

        match sniff_magic(path) {
            Some(category) => category,
            None => Self::Others,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Audio => "audio",
            Self::Documents => "documents",
            Self::Archives => "archives",
            Self::Package => "package",
            Self::Code => "code",
            Self::Others => "others",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn category_for_extension(ext: &str) -> Option<FileCategory> {
    let category = match ext {
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "heic" => FileCategory::Images,
        "mp4" | "mkv" | "avi" | "webm" | "mov" => FileCategory::Videos,
        "mp3" | "flac" | "wav" | "ogg" => FileCategory::Audio,
        "pdf" | "doc" | "docx" | "txt" => FileCategory::Documents,
        "zip" | "rar" | "7z" => FileCategory::Archives,
        "apk" | "deb" | "rpm" => FileCategory::Package,
        "rs" | "c" | "cpp" | "h" | "kt" | "dart" | "py" => FileCategory::Code,
        _ => return None,
    };
    Some(category)
}

fn sniff_magic(path: &Path) -> Option<FileCategory> {
    let mut header = [0u8; 4];
    let mut file = File::open(path).ok()?;
    let read = file.read(&mut header).ok()?;
    let header = &header[..read];

    if header.starts_with(b"\x89PNG") {
        Some(FileCategory::Images)
    } else if header.starts_with(b"%PDF") {
        Some(FileCategory::Documents)
    } else if header.starts_with(b"PK\x03\x04") {
        Some(FileCategory::Archives)
    } else {
        None
    }
}
