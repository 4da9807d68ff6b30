// ============================================================================
// woxel-platform/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools
//
// This module encapsulates interactions with the external media tools the
// bridge delegates codec work to (ffmpeg and ffprobe). It provides
// abstractions through traits and concrete implementations so the external
// dependencies stay testable and injectable.
//
// KEY COMPONENTS:
// - Traits for ffmpeg process interaction (FfmpegSpawner, FfmpegProcess)
// - Concrete implementation using ffmpeg-sidecar
// - ffprobe duration query used for representative-frame selection
// - Dependency checking functions

// ---- Internal crate imports ----
use crate::error::{BridgeError, BridgeResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains the ffprobe duration query
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::probe_duration;

// Re-exported so consumers can implement FfmpegSpawner without depending on
// ffmpeg-sidecar themselves.
pub use ffmpeg_sidecar::command::FfmpegCommand;

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs the command with a `-version` argument to verify that it exists and
/// can start. Used by consumers that want to fail fast before issuing video
/// thumbnail requests (image thumbnails decode in-process and need nothing).
pub fn check_dependency(cmd_name: &str) -> BridgeResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", cmd_name);
                Err(BridgeError::DependencyNotFound(cmd_name.to_string()))
            } else {
                log::error!(
                    "Failed to start dependency check command '{}': {}",
                    cmd_name,
                    e
                );
                Err(crate::error::command_start_error(cmd_name, e))
            }
        }
    }
}
