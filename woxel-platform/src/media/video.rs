//! Video thumbnail generation.
//!
//! Delegates frame selection and scaling to ffmpeg through the injected
//! spawner capability, then decodes and bounds the extracted frame exactly
//! like the image path. Which frame is "representative" is host policy
//! (ffmpeg's thumbnail filter over a window near the seek point); no
//! specific frame is guaranteed, only some representative frame or no
//! result.

use std::path::Path;

use crate::config::MediaConfig;
use crate::error::BridgeResult;
use crate::external::ffmpeg_executor::{FfmpegSpawner, extract_frame};
use crate::external::ffprobe_executor::probe_duration;
use crate::media::thumbnail::{Thumbnail, decode_bounded};
use crate::temp_files;

/// Requests a decoded bitmap for a representative frame of the video at
/// `path`, bounded to `size`x`size` aspect-preserving.
///
/// Same contract as [`thumbnail_for_image`](crate::media::thumbnail_for_image):
/// `None` for `size == 0`, unreadable paths, unsupported formats, or any
/// extraction/decode failure. The extracted frame goes through an
/// auto-cleaned temporary directory and is never persisted.
pub fn thumbnail_for_video<S: FfmpegSpawner>(
    spawner: &S,
    config: &MediaConfig,
    path: &Path,
    size: u32,
) -> Option<Thumbnail> {
    if size == 0 {
        log::warn!("Video thumbnail requested with size 0 for {}", path.display());
        return None;
    }
    if let Err(e) = config.validate() {
        log::warn!("Rejecting video thumbnail request: {}", e);
        return None;
    }
    match extract_and_decode(spawner, config, path, size) {
        Ok(thumbnail) => Some(thumbnail),
        Err(e) => {
            log::debug!("No video thumbnail for {}: {}", path.display(), e);
            None
        }
    }
}

fn extract_and_decode<S: FfmpegSpawner>(
    spawner: &S,
    config: &MediaConfig,
    path: &Path,
    size: u32,
) -> BridgeResult<Thumbnail> {
    // A failed probe is not fatal: extraction then starts at the beginning
    // of the stream.
    let seek_secs = match probe_duration(path) {
        Ok(duration) if duration.is_finite() && duration > 0.0 => {
            Some(duration * config.seek_fraction)
        }
        Ok(_) => None,
        Err(e) => {
            log::debug!("Duration probe failed for {}: {}", path.display(), e);
            None
        }
    };

    let temp_dir = temp_files::create_temp_dir("woxel_thumb")?;
    let frame_path = temp_files::create_temp_file_path(temp_dir.path(), "frame", "png");

    extract_frame(spawner, path, seek_secs, size, &frame_path)?;
    decode_bounded(&frame_path, size)
    // temp_dir drops here, removing the extracted frame
}
