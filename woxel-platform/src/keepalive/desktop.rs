//! XDG desktop implementation of the notification host.
//!
//! Backed by notify-rust. Desktop notification servers have no channel
//! registry and no process supervisor, so the channel's importance is
//! remembered locally and applied per-notice as urgency, and the keepalive
//! privilege is only recorded; the sticky directive is still returned to
//! the caller by the notifier.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use notify_rust::{Notification, Timeout, Urgency};

use crate::config::Importance;
use crate::error::{BridgeError, BridgeResult};
use crate::keepalive::abstraction::{NoticeChannel, NotificationHost, OperationNotice};

/// Notification host for XDG desktops.
#[derive(Debug)]
pub struct DesktopNotificationHost {
    urgency: Mutex<Urgency>,
    keepalive_held: AtomicBool,
}

impl DesktopNotificationHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for DesktopNotificationHost {
    fn default() -> Self {
        Self {
            urgency: Mutex::new(Urgency::Low),
            keepalive_held: AtomicBool::new(false),
        }
    }
}

fn map_urgency(importance: Importance) -> Urgency {
    match importance {
        Importance::Low => Urgency::Low,
        Importance::Default => Urgency::Normal,
        Importance::High => Urgency::Critical,
    }
}

impl NotificationHost for DesktopNotificationHost {
    fn ensure_channel(&self, channel: &NoticeChannel) -> BridgeResult<()> {
        // XDG servers group by application, not by channel; the importance
        // policy is applied per-notice as urgency instead.
        let urgency = map_urgency(channel.importance);
        *self.urgency.lock().unwrap_or_else(|e| e.into_inner()) = urgency;
        log::debug!(
            "Desktop host has no channel registry; '{}' maps to urgency {:?}",
            channel.id,
            urgency
        );
        Ok(())
    }

    fn post_notice(&self, notice: &OperationNotice) -> BridgeResult<()> {
        let urgency = *self.urgency.lock().unwrap_or_else(|e| e.into_inner());
        Notification::new()
            .appname(&notice.title)
            .summary(&notice.title)
            .body(&notice.body)
            .icon(&notice.icon)
            .id(notice.slot)
            .urgency(urgency)
            .timeout(Timeout::Never)
            .show()
            .map_err(|e| BridgeError::Notification(e.to_string()))?;
        Ok(())
    }

    fn cancel_notice(&self, slot: u32) -> BridgeResult<()> {
        // CloseNotification is only reachable through a live handle, which
        // would pin a bus connection for the whole operation; replacing the
        // slot with an immediately-expiring notice clears it instead.
        Notification::new()
            .id(slot)
            .timeout(Timeout::Milliseconds(1))
            .show()
            .map_err(|e| BridgeError::Notification(e.to_string()))?;
        Ok(())
    }

    fn acquire_keepalive(&self, operation_id: &str) -> BridgeResult<()> {
        self.keepalive_held.store(true, Ordering::SeqCst);
        log::debug!(
            "Keepalive requested for '{}' (no process supervisor on this host)",
            operation_id
        );
        Ok(())
    }

    fn release_keepalive(&self) -> BridgeResult<()> {
        if !self.keepalive_held.swap(false, Ordering::SeqCst) {
            log::debug!("Keepalive released while not held");
        }
        Ok(())
    }
}
