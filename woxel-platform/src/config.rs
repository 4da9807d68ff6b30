// ============================================================================
// woxel-platform/src/config.rs
// ============================================================================
//
// CONFIGURATION: Bridge Configuration Structures and Constants
//
// This module defines the configuration structures used by the platform
// bridge. The engine constructs these once and injects them alongside the
// host capabilities, so no configuration is looked up globally.
//
// KEY COMPONENTS:
// - NoticeConfig: Channel identity and notice content for the keepalive notifier
// - MediaConfig: Tunables for video frame selection
// - Importance: Interruption policy for the notification channel
//
// USAGE:
// Instances are created by consumers of the library (the engine or
// woxel-cli) and passed to KeepaliveNotifier::new and thumbnail_for_video.

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, BridgeResult};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Identifier of the notification channel all operation notices belong to.
pub const DEFAULT_CHANNEL_ID: &str = "woxel_tasks";

/// Human-readable channel name shown by the host's notification settings.
pub const DEFAULT_CHANNEL_NAME: &str = "Woxel Tasks";

/// Fixed slot id of the singleton operation notice.
pub const DEFAULT_NOTICE_SLOT: u32 = 1001;

/// Notice title, the application name.
pub const DEFAULT_NOTICE_TITLE: &str = "Woxel";

/// Fixed notice body shown while an operation runs.
pub const DEFAULT_NOTICE_BODY: &str = "File operation in progress";

/// Icon reference handed to the notification host.
pub const DEFAULT_NOTICE_ICON: &str = "drive-harddisk";

/// Fraction of the stream duration used as the seek point for the
/// representative video frame.
pub const DEFAULT_SEEK_FRACTION: f64 = 0.1;

// ============================================================================
// IMPORTANCE
// ============================================================================

/// Interruption policy of a notification channel.
///
/// Operation notices use `Low` so a running file operation never interrupts
/// the user; the field exists so hosts can map the policy onto their own
/// urgency model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    Low,
    Default,
    High,
}

// ============================================================================
// NOTICE CONFIGURATION
// ============================================================================

/// Channel identity and notice content for the keepalive notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// Channel identifier the notice is filed under
    pub channel_id: String,
    /// Human-readable channel name
    pub channel_name: String,
    /// Channel interruption policy
    pub importance: Importance,
    /// Fixed slot id of the singleton notice
    pub slot: u32,
    /// Notice title (application name)
    pub title: String,
    /// Notice body
    pub body: String,
    /// Icon reference
    pub icon: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            importance: Importance::Low,
            slot: DEFAULT_NOTICE_SLOT,
            title: DEFAULT_NOTICE_TITLE.to_string(),
            body: DEFAULT_NOTICE_BODY.to_string(),
            icon: DEFAULT_NOTICE_ICON.to_string(),
        }
    }
}

impl NoticeConfig {
    /// Validates the configuration.
    ///
    /// The slot id must be non-zero (hosts treat 0 as "allocate a fresh id",
    /// which would break the singleton-notice contract) and the channel and
    /// text fields must be non-empty.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.slot == 0 {
            return Err(BridgeError::InvalidConfig(
                "notice slot id must be non-zero".to_string(),
            ));
        }
        for (field, value) in [
            ("channel_id", &self.channel_id),
            ("channel_name", &self.channel_name),
            ("title", &self.title),
            ("body", &self.body),
        ] {
            if value.trim().is_empty() {
                return Err(BridgeError::InvalidConfig(format!(
                    "notice {field} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// MEDIA CONFIGURATION
// ============================================================================

/// Tunables for video frame selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Fraction of the stream duration to seek into before grabbing the
    /// representative frame. Ignored when the duration cannot be probed.
    pub seek_fraction: f64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            seek_fraction: DEFAULT_SEEK_FRACTION,
        }
    }
}

impl MediaConfig {
    /// Validates the configuration. The seek fraction must lie in [0, 1).
    pub fn validate(&self) -> BridgeResult<()> {
        if !(0.0..1.0).contains(&self.seek_fraction) {
            return Err(BridgeError::InvalidConfig(format!(
                "seek_fraction must be in [0, 1), got {}",
                self.seek_fraction
            )));
        }
        Ok(())
    }
}
