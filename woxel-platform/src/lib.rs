//! Platform bridge connecting the native Woxel file-management engine to
//! host operating-system services.
//!
//! Two independent components, both called by the engine:
//!
//! - [`keepalive`]: a long-running-operation notifier that keeps a
//!   background file task alive and visible while the process may otherwise
//!   be suspended.
//! - [`media`]: a media introspection bridge producing bounded-size
//!   thumbnail bitmaps for images and videos and resolving content handles
//!   to MIME types.
//!
//! Host services are reached through injected capabilities (a
//! [`NotificationHost`], an [`FfmpegSpawner`](external::FfmpegSpawner), a
//! [`ContentResolver`]), never through global lookups. Media calls are
//! synchronous and fail-silent: every failure collapses to an absent
//! result, and the engine falls back to a generic icon or "unknown" type.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use woxel_platform::{KeepaliveNotifier, NoticeConfig, NullNotificationHost};
//! use woxel_platform::media::{thumbnail_for_image, resolve_mime};
//! use woxel_platform::media::{ContentHandle, SniffingContentResolver};
//!
//! let notifier = KeepaliveNotifier::new(NullNotificationHost, NoticeConfig::default()).unwrap();
//! let directive = notifier.start("copy-42");
//!
//! let thumb = thumbnail_for_image(Path::new("/photos/shot.jpg"), 128);
//! let mime = resolve_mime(
//!     &SniffingContentResolver::new(),
//!     &ContentHandle::from("file:///photos/shot.jpg"),
//! );
//!
//! notifier.stop();
//! # let _ = (directive, thumb, mime);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod keepalive;
pub mod media;
pub mod temp_files;

// Re-exports for public API
pub use config::{Importance, MediaConfig, NoticeConfig};
pub use error::{BridgeError, BridgeResult};
pub use keepalive::{
    KeepaliveNotifier, NoticeChannel, NotificationHost, NullNotificationHost, OperationNotice,
    RestartDirective,
};
pub use media::{
    ContentHandle, ContentResolver, FileCategory, InFlightSet, SniffingContentResolver, Thumbnail,
    resolve_mime, thumbnail_for_image, thumbnail_for_video,
};

#[cfg(all(unix, not(target_os = "macos")))]
pub use keepalive::DesktopNotificationHost;
