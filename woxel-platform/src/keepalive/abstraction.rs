// ============================================================================
// woxel-platform/src/keepalive/abstraction.rs
// ============================================================================
//
// NOTIFICATION ABSTRACTION: Host Notification Subsystem Abstractions
//
// This module defines the capability the engine injects into the keepalive
// notifier. Hosts implement `NotificationHost`; the notifier never looks up
// notification services globally.
//
// KEY COMPONENTS:
// - NoticeChannel / OperationNotice: Wire types between notifier and host
// - RestartDirective: The value handed back to the host process supervisor
// - NotificationHost: Trait for posting and cancelling operation notices
// - NullNotificationHost: No-op implementation for headless runs and tests

use crate::config::Importance;
use crate::error::BridgeResult;

// ============================================================================
// WIRE TYPES
// ============================================================================

/// A host-defined grouping of notices with a shared interruption policy.
///
/// Created at most once per process lifetime, before the first notice is
/// shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeChannel {
    /// Stable channel identifier
    pub id: String,
    /// Human-readable name shown in the host's notification settings
    pub name: String,
    /// Interruption policy (fixed to Low for operation notices)
    pub importance: Importance,
}

/// A persistent status notice for one running operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationNotice {
    /// Fixed slot id; posting to an occupied slot replaces the notice
    pub slot: u32,
    /// Channel the notice is filed under
    pub channel_id: String,
    /// Notice title (application name)
    pub title: String,
    /// Notice body
    pub body: String,
    /// Icon reference
    pub icon: String,
}

/// Instruction to the host process supervisor about a reclaimed component.
///
/// `Sticky` tells the supervisor to restart the hosting component after
/// resource reclamation instead of abandoning the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartDirective {
    Sticky,
    Abandon,
}

// ============================================================================
// NOTIFICATION HOST
// ============================================================================

/// Capability for the host notification subsystem.
///
/// Implementations post and cancel notices by fixed slot id and relay the
/// keepalive privilege to the host's process supervisor. All methods may be
/// called from any thread; failures are reported as errors but the notifier
/// treats them as recoverable (the host surfaces denial asynchronously,
/// outside this bridge).
pub trait NotificationHost: Send + Sync {
    /// Ensures the channel exists before any notice is filed under it.
    ///
    /// Called exactly once per notifier lifetime; must be idempotent on the
    /// host side as well.
    fn ensure_channel(&self, channel: &NoticeChannel) -> BridgeResult<()>;

    /// Posts (or replaces) the notice in its slot.
    fn post_notice(&self, notice: &OperationNotice) -> BridgeResult<()>;

    /// Removes the notice in the given slot, if present.
    fn cancel_notice(&self, slot: u32) -> BridgeResult<()>;

    /// Requests that the named operation keep running under resource pressure.
    fn acquire_keepalive(&self, operation_id: &str) -> BridgeResult<()>;

    /// Releases the keepalive privilege.
    fn release_keepalive(&self) -> BridgeResult<()>;
}

/// No-op implementation of NotificationHost that does nothing.
///
/// Useful for headless runs and tests where no notification service exists.
#[derive(Debug, Clone, Default)]
pub struct NullNotificationHost;

impl NotificationHost for NullNotificationHost {
    fn ensure_channel(&self, _channel: &NoticeChannel) -> BridgeResult<()> {
        Ok(())
    }

    fn post_notice(&self, _notice: &OperationNotice) -> BridgeResult<()> {
        Ok(())
    }

    fn cancel_notice(&self, _slot: u32) -> BridgeResult<()> {
        Ok(())
    }

    fn acquire_keepalive(&self, _operation_id: &str) -> BridgeResult<()> {
        Ok(())
    }

    fn release_keepalive(&self) -> BridgeResult<()> {
        Ok(())
    }
}
