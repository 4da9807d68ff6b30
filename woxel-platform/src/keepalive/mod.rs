//! Operation keepalive notifier.
//!
//! Keeps a background file operation alive and visible while the process
//! may otherwise be suspended: surfaces a persistent, low-importance status
//! notice for the duration of the operation and hands the host scheduler a
//! sticky restart directive.

mod abstraction;
mod notifier;

#[cfg(all(unix, not(target_os = "macos")))]
mod desktop;

pub use abstraction::{
    NoticeChannel, NotificationHost, NullNotificationHost, OperationNotice, RestartDirective,
};
pub use notifier::KeepaliveNotifier;

#[cfg(all(unix, not(target_os = "macos")))]
pub use desktop::DesktopNotificationHost;
