//! Image thumbnail generation.
//!
//! Decoding happens in-process via the image crate. The result is a derived
//! bitmap only; the source file is never mutated and nothing is persisted.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::error::{BridgeError, BridgeResult};

/// A decoded RGBA8 bitmap, owned by the bridge until handed to the caller.
///
/// Never partially decoded: either the whole source decoded and downscaled
/// cleanly, or the request produced no result at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Thumbnail {
    pub(crate) fn from_dynamic(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The larger of the two dimensions.
    pub fn max_dimension(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the thumbnail, returning the raw RGBA8 pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// Requests a decoded bitmap for the image at `path`, downscaled
/// aspect-preserving so both dimensions are at most `size`.
///
/// Returns `None` for `size == 0`, an unreadable path, an unsupported
/// format, or any decode failure; absence means "fall back to a generic
/// file icon", not a program error.
pub fn thumbnail_for_image(path: &Path, size: u32) -> Option<Thumbnail> {
    if size == 0 {
        log::warn!("Image thumbnail requested with size 0 for {}", path.display());
        return None;
    }
    match decode_bounded(path, size) {
        Ok(thumbnail) => Some(thumbnail),
        Err(e) => {
            log::debug!("No image thumbnail for {}: {}", path.display(), e);
            None
        }
    }
}

pub(crate) fn decode_bounded(path: &Path, size: u32) -> BridgeResult<Thumbnail> {
    let image = image::open(path)
        .map_err(|e| BridgeError::ImageDecode(format!("{}: {e}", path.display())))?;
    // Sources already within the bound are handed back at their own size;
    // a preview is never an upscale.
    let (width, height) = image.dimensions();
    let bound = size.min(width.max(height)).max(1);
    Ok(Thumbnail::from_dynamic(image.thumbnail(bound, bound)))
}
