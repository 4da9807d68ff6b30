// ============================================================================
// woxel-platform/src/media/mime.rs
// ============================================================================
//
// MIME RESOLUTION: Content Handle Type Lookup
//
// This module resolves opaque content handles to MIME types through a
// resolver capability the caller already holds. Resolution is a pure query:
// no side effects, and an unresolvable handle is "unknown", not an error.
//
// KEY COMPONENTS:
// - ContentHandle: Opaque, resolver-mediated reference to a resource
// - ContentResolver: Capability trait for host type lookup
// - SniffingContentResolver: file:// resolver using extensions and magic bytes

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::BridgeResult;

// ============================================================================
// CONTENT HANDLE
// ============================================================================

/// An opaque identifier for a resource, as opposed to a direct filesystem
/// path. Only a resolver capability can interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHandle(String);

impl ContentHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme portion of the handle, if it has one.
    pub fn scheme(&self) -> Option<&str> {
        self.0.split_once("://").map(|(scheme, _)| scheme)
    }
}

impl std::fmt::Display for ContentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentHandle {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

// ============================================================================
// CONTENT RESOLVER
// ============================================================================

/// Capability for the host content-resolution subsystem.
///
/// The caller must already hold the capability; the bridge never acquires
/// one itself. `Ok(None)` means the host cannot classify the handle.
pub trait ContentResolver: Send + Sync {
    fn resolve_type(&self, handle: &ContentHandle) -> BridgeResult<Option<String>>;
}

/// Resolves `handle` to a MIME type through the borrowed resolver capability.
///
/// Pure query with no side effects. Returns `None` both when the host
/// cannot classify the handle and when resolution fails outright; callers
/// cannot and should not distinguish the two here.
pub fn resolve_mime<R: ContentResolver + ?Sized>(
    resolver: &R,
    handle: &ContentHandle,
) -> Option<String> {
    match resolver.resolve_type(handle) {
        Ok(mime) => mime,
        Err(e) => {
            log::debug!("MIME resolution failed for '{}': {}", handle, e);
            None
        }
    }
}

// ============================================================================
// SNIFFING RESOLVER
// ============================================================================

static EXTENSION_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("heic", "image/heic"),
        ("mp4", "video/mp4"),
        ("mkv", "video/x-matroska"),
        ("avi", "video/x-msvideo"),
        ("webm", "video/webm"),
        ("mov", "video/quicktime"),
        ("mp3", "audio/mpeg"),
        ("flac", "audio/flac"),
        ("wav", "audio/x-wav"),
        ("ogg", "audio/ogg"),
        ("pdf", "application/pdf"),
        ("doc", "application/msword"),
        (
            "docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
        ("zip", "application/zip"),
        ("rar", "application/vnd.rar"),
        ("7z", "application/x-7z-compressed"),
        ("apk", "application/vnd.android.package-archive"),
        ("txt", "text/plain"),
    ])
});

/// Resolver for `file://` handles, classifying by extension first and by
/// magic bytes when the extension is unknown.
#[derive(Debug, Clone, Default)]
pub struct SniffingContentResolver;

impl SniffingContentResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ContentResolver for SniffingContentResolver {
    fn resolve_type(&self, handle: &ContentHandle) -> BridgeResult<Option<String>> {
        let Some(path) = file_path_of(handle) else {
            log::debug!("Handle '{}' has no file scheme, cannot classify", handle);
            return Ok(None);
        };

        if let Some(ext) = extension_of(&path) {
            if let Some(mime) = EXTENSION_TYPES.get(ext.as_str()) {
                return Ok(Some((*mime).to_string()));
            }
        }

        Ok(sniff_magic(Path::new(&path)).map(str::to_string))
    }
}

fn file_path_of(handle: &ContentHandle) -> Option<String> {
    match handle.as_str().split_once("://") {
        Some(("file", path)) => Some(path.to_string()),
        Some(_) => None,
        // A bare handle without a scheme is treated as a local path.
        None => Some(handle.as_str().to_string()),
    }
}

fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Classifies by leading magic bytes. Read failures mean "unknown".
fn sniff_magic(path: &Path) -> Option<&'static str> {
    let mut header = [0u8; 8];
    let mut file = File::open(path).ok()?;
    let read = file.read(&mut header).ok()?;
    let header = &header[..read];

    if header.starts_with(b"\x89PNG") {
        Some("image/png")
    } else if header.starts_with(b"%PDF") {
        Some("application/pdf")
    } else if header.starts_with(b"PK\x03\x04") {
        Some("application/zip")
    } else if header.starts_with(b"\xFF\xD8\xFF") {
        Some("image/jpeg")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_scheme_parsing() {
        assert_eq!(ContentHandle::from("file:///a/b.png").scheme(), Some("file"));
        assert_eq!(ContentHandle::from("content://media/7").scheme(), Some("content"));
        assert_eq!(ContentHandle::from("plain.txt").scheme(), None);
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        let resolver = SniffingContentResolver::new();
        let mime = resolver
            .resolve_type(&ContentHandle::from("file:///shots/PHOTO.JPG"))
            .unwrap();
        assert_eq!(mime.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn foreign_scheme_is_unknown() {
        let resolver = SniffingContentResolver::new();
        let mime = resolver
            .resolve_type(&ContentHandle::from("content://media/external/7"))
            .unwrap();
        assert_eq!(mime, None);
    }
}
