// woxel-cli/src/main.rs
//
// This file defines the command-line front end for the Woxel platform
// bridge. It is a developer utility for exercising the bridge outside the
// engine: batch thumbnail generation, MIME lookup, and a keepalive notice
// demo.
//
// Responsibilities include:
// - Defining CLI argument structures (`Cli`, `Commands`, per-command args).
// - Initializing logging (env_logger, RUST_LOG).
// - Driving the bridge's media functions over a batch of files in parallel.
// - Handling results and errors at the binary boundary.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use rayon::prelude::*;

use woxel_platform::external::SidecarSpawner;
use woxel_platform::{
    ContentHandle, FileCategory, InFlightSet, KeepaliveNotifier, MediaConfig, NoticeConfig,
    NotificationHost, SniffingContentResolver, resolve_mime, thumbnail_for_image,
    thumbnail_for_video,
};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Woxel: platform bridge developer utility",
    long_about = "Exercises the woxel-platform bridge: thumbnail generation, MIME lookup, \
                  and the keepalive operation notice."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates bounded thumbnails for images and videos
    Thumb(ThumbArgs),
    /// Resolves content handles to MIME types
    Mime(MimeArgs),
    /// Shows the keepalive operation notice for a few seconds
    NotifyDemo(NotifyDemoArgs),
}

#[derive(Parser, Debug)]
struct ThumbArgs {
    /// Image or video files to thumbnail
    #[arg(required = true, value_name = "PATHS")]
    inputs: Vec<PathBuf>,

    /// Bounding dimension; both sides of each thumbnail stay within it
    #[arg(short, long, default_value_t = 128)]
    size: u32,

    /// Output directory (defaults to thumbs_<timestamp>)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MimeArgs {
    /// Content handles (file:// URIs or bare paths)
    #[arg(required = true, value_name = "HANDLES")]
    handles: Vec<String>,
}

#[derive(Parser, Debug)]
struct NotifyDemoArgs {
    /// How long to hold the notice before stopping
    #[arg(long, default_value_t = 5)]
    seconds: u64,
}

// --- Helper Functions ---

fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

// --- Thumb Command ---

fn run_thumb(args: ThumbArgs) -> Result<()> {
    let out_dir = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("thumbs_{}", get_timestamp())));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory '{}'", out_dir.display()))?;

    // Image thumbnails decode in-process; only the video path shells out.
    if let Err(e) = woxel_platform::external::check_dependency("ffmpeg") {
        log::warn!("Video thumbnails unavailable: {}", e);
    }

    let spawner = SidecarSpawner;
    let config = MediaConfig::default();
    let in_flight = InFlightSet::new();
    let progress = ProgressBar::new(args.inputs.len() as u64);

    let produced: usize = args
        .inputs
        .par_iter()
        .map(|path| {
            let outcome = generate_one(&spawner, &config, &in_flight, path, args.size, &out_dir);
            progress.inc(1);
            match outcome {
                Ok(true) => 1,
                Ok(false) => 0,
                Err(e) => {
                    log::warn!("{}: {e:#}", path.display());
                    0
                }
            }
        })
        .sum();
    progress.finish_and_clear();

    println!(
        "Wrote {} thumbnail(s) for {} input(s) to {}",
        produced,
        args.inputs.len(),
        out_dir.display()
    );
    Ok(())
}

/// Generates one thumbnail. Returns Ok(false) when the input was skipped
/// (duplicate request, unsupported category, or no result from the bridge).
fn generate_one(
    spawner: &SidecarSpawner,
    config: &MediaConfig,
    in_flight: &InFlightSet,
    path: &Path,
    size: u32,
    out_dir: &Path,
) -> Result<bool> {
    let key = format!("{}|{}", path.display(), size);
    if !in_flight.begin(&key) {
        log::debug!("Skipping duplicate request for {}", path.display());
        return Ok(false);
    }
    let outcome = write_thumbnail(spawner, config, path, size, out_dir);
    in_flight.finish(&key);
    outcome
}

fn write_thumbnail(
    spawner: &SidecarSpawner,
    config: &MediaConfig,
    path: &Path,
    size: u32,
    out_dir: &Path,
) -> Result<bool> {
    let category = FileCategory::detect(path, None);
    let thumb = match category {
        FileCategory::Images => thumbnail_for_image(path, size),
        FileCategory::Videos => thumbnail_for_video(spawner, config, path, size),
        other => {
            log::info!(
                "Skipping {} (category '{}' has no thumbnail path)",
                path.display(),
                other
            );
            return Ok(false);
        }
    };
    let Some(thumb) = thumb else {
        log::info!("No thumbnail for {} (falling back to generic icon)", path.display());
        return Ok(false);
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "thumb".to_string());
    let out_path = out_dir.join(format!("{stem}_{size}px.png"));

    let (width, height) = (thumb.width(), thumb.height());
    let img = image::RgbaImage::from_raw(width, height, thumb.into_pixels())
        .context("Thumbnail buffer did not match its dimensions")?;
    img.save(&out_path)
        .with_context(|| format!("Failed to write '{}'", out_path.display()))?;

    log::debug!("{} -> {} ({width}x{height})", path.display(), out_path.display());
    Ok(true)
}

// --- Mime Command ---

fn run_mime(args: MimeArgs) -> Result<()> {
    let resolver = SniffingContentResolver::new();
    for raw in &args.handles {
        let handle = ContentHandle::from(raw.as_str());
        let mime = resolve_mime(&resolver, &handle);
        println!("{}\t{}", raw, mime.as_deref().unwrap_or("unknown"));
    }
    Ok(())
}

// --- Notify-Demo Command ---

fn run_notify_demo(args: NotifyDemoArgs) -> Result<()> {
    #[cfg(all(unix, not(target_os = "macos")))]
    let host = woxel_platform::DesktopNotificationHost::new();
    #[cfg(not(all(unix, not(target_os = "macos"))))]
    let host = woxel_platform::NullNotificationHost;

    hold_notice(host, args.seconds)
}

fn hold_notice<H: NotificationHost>(host: H, seconds: u64) -> Result<()> {
    let notifier = KeepaliveNotifier::new(host, NoticeConfig::default())?;
    let directive = notifier.start("notify-demo");
    println!("Operation notice active (directive: {directive:?}); holding for {seconds}s");
    thread::sleep(Duration::from_secs(seconds));
    notifier.stop();
    println!("Operation notice cleared");
    Ok(())
}

// --- Main ---

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Thumb(args) => run_thumb(args),
        Commands::Mime(args) => run_mime(args),
        Commands::NotifyDemo(args) => run_notify_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_thumb_basic_args() {
        let cli = Cli::parse_from(["woxel", "thumb", "a.jpg", "b.mp4"]);
        match cli.command {
            Commands::Thumb(args) => {
                assert_eq!(args.inputs.len(), 2);
                assert_eq!(args.size, 128);
                assert!(args.out.is_none());
            }
            _ => panic!("Expected Thumb command"),
        }
    }

    #[test]
    fn test_parse_thumb_with_size_and_out() {
        let cli = Cli::parse_from(["woxel", "thumb", "a.jpg", "--size", "64", "--out", "previews"]);
        match cli.command {
            Commands::Thumb(args) => {
                assert_eq!(args.size, 64);
                assert_eq!(args.out, Some(PathBuf::from("previews")));
            }
            _ => panic!("Expected Thumb command"),
        }
    }

    #[test]
    fn test_parse_mime_handles() {
        let cli = Cli::parse_from(["woxel", "mime", "file:///a.png", "content://media/7"]);
        match cli.command {
            Commands::Mime(args) => {
                assert_eq!(args.handles.len(), 2);
            }
            _ => panic!("Expected Mime command"),
        }
    }

    #[test]
    fn test_parse_notify_demo_defaults() {
        let cli = Cli::parse_from(["woxel", "notify-demo"]);
        match cli.command {
            Commands::NotifyDemo(args) => assert_eq!(args.seconds, 5),
            _ => panic!("Expected NotifyDemo command"),
        }
    }
}
