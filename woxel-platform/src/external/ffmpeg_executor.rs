// ============================================================================
// woxel-platform/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// This module provides abstractions for spawning and waiting on ffmpeg
// processes, plus the single-frame extraction command used by the video
// thumbnail path.
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active ffmpeg process
// - FfmpegSpawner: Trait for creating new ffmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - extract_frame: Representative-frame extraction for video thumbnails
//
// ARCHITECTURE:
// The trait-based design lets the engine (and the test suite) inject its own
// process implementation instead of shelling out to a real ffmpeg binary.

use crate::error::{BridgeResult, command_failed_error, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::Path;
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> BridgeResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> BridgeResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn wait(&mut self) -> BridgeResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> BridgeResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Frame Extraction ---

/// Extracts one representative frame from a video into `output_path`.
///
/// Seeks to `seek_secs` when a duration could be probed, then lets ffmpeg's
/// `thumbnail` filter pick a non-blank frame and scales it to fit within
/// `size`x`size` without upscaling. The caller re-bounds the decoded bitmap
/// afterwards, so the filter is a cost optimization, not the invariant.
pub fn extract_frame<S: FfmpegSpawner>(
    spawner: &S,
    input_path: &Path,
    seek_secs: Option<f64>,
    size: u32,
    output_path: &Path,
) -> BridgeResult<()> {
    log::debug!(
        "Extracting frame: input={}, seek={:?}, size={}, out={}",
        input_path.display(),
        seek_secs,
        size,
        output_path.display()
    );

    // Use mutable command object and sequential calls
    let mut cmd = FfmpegCommand::new();

    if let Some(seek) = seek_secs {
        cmd.arg("-ss");
        cmd.arg(format!("{seek:.3}"));
    }
    cmd.input(input_path.to_string_lossy().as_ref());
    cmd.arg("-vf");
    cmd.arg(format!(
        "thumbnail,scale=w='min(iw,{size})':h='min(ih,{size})':force_original_aspect_ratio=decrease"
    ));
    cmd.arg("-frames:v");
    cmd.arg("1");
    cmd.arg("-an"); // No audio
    cmd.arg("-sn"); // No subtitles
    cmd.arg("-update");
    cmd.arg("1"); // Single-image output
    cmd.overwrite();
    cmd.output(output_path.to_string_lossy().as_ref());

    log::debug!("Running frame extraction command: {:?}", cmd);

    let status = spawner.spawn(cmd)?.wait()?;
    if !status.success() {
        log::debug!("Frame extraction failed: {}", status);
        return Err(command_failed_error(
            "ffmpeg (frame extraction)",
            status,
            "Frame extraction process failed",
        ));
    }

    log::debug!("Frame extracted to: {}", output_path.display());
    Ok(())
}
