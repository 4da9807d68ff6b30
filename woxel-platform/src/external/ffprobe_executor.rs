//! FFprobe integration for representative-frame selection.
//!
//! The video thumbnail path only needs the stream duration to pick a seek
//! point; a probe failure is tolerated by the caller (extraction then starts
//! from the beginning of the stream).

use crate::error::{BridgeError, BridgeResult};
use ffprobe::ffprobe;
use std::path::Path;

/// Gets the duration in seconds of the media at `input_path`.
pub fn probe_duration(input_path: &Path) -> BridgeResult<f64> {
    log::debug!(
        "Running ffprobe (via crate) for duration on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => metadata
            .format
            .duration
            .as_deref()
            .and_then(|d| d.parse::<f64>().ok())
            .ok_or_else(|| {
                BridgeError::FfprobeParse(format!(
                    "Failed to parse duration from format for {}",
                    input_path.display()
                ))
            }),
        Err(err) => {
            log::debug!(
                "ffprobe failed for duration on {}: {:?}",
                input_path.display(),
                err
            );
            Err(BridgeError::FfprobeParse(format!(
                "ffprobe failed for {}: {err:?}",
                input_path.display()
            )))
        }
    }
}
