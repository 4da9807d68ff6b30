// ============================================================================
// woxel-platform/src/keepalive/notifier.rs
// ============================================================================
//
// KEEPALIVE NOTIFIER: Long-Running-Operation Lifecycle
//
// The engine constructs one notifier per process, injecting the notification
// host capability and the notice configuration, then brackets every long
// file operation with start()/stop().
//
// KEY COMPONENTS:
// - KeepaliveNotifier: start/stop lifecycle around a singleton notice
// - NotifierState: Idle/Running state machine
//
// ARCHITECTURE:
// Channel creation happens exactly once per notifier lifetime, guarded by
// std::sync::Once so concurrent first start() calls cannot race it. Host
// failures never propagate out of start()/stop(); the host surfaces denied
// privileges asynchronously through its own signals.

use std::sync::{Mutex, Once};

use crate::config::NoticeConfig;
use crate::error::BridgeResult;
use crate::keepalive::abstraction::{
    NoticeChannel, NotificationHost, OperationNotice, RestartDirective,
};

/// Lifecycle state of the singleton operation notice.
///
/// `Idle` is re-entered only from `Running` via an explicit `stop()`.
/// Forced termination by the host is an external transition this component
/// never observes; the engine reconciles that case on next launch.
#[derive(Debug)]
enum NotifierState {
    Idle,
    Running { operation_id: String },
}

/// Keeps a background file operation alive and visible while it runs.
pub struct KeepaliveNotifier<H: NotificationHost> {
    host: H,
    config: NoticeConfig,
    channel_init: Once,
    state: Mutex<NotifierState>,
}

impl<H: NotificationHost> KeepaliveNotifier<H> {
    /// Creates a notifier around the injected host capability.
    ///
    /// Fails only on invalid configuration; nothing is posted yet.
    pub fn new(host: H, config: NoticeConfig) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self {
            host,
            config,
            channel_init: Once::new(),
            state: Mutex::new(NotifierState::Idle),
        })
    }

    /// Activates the keepalive notice for `operation_id`.
    ///
    /// Idempotent: starting while another operation runs replaces the notice
    /// in its fixed slot rather than stacking a second one. On the first
    /// invocation in the notifier's lifetime the notification channel is
    /// created (with low importance) before the notice is shown; concurrent
    /// first calls create it exactly once.
    ///
    /// Always returns `RestartDirective::Sticky`. A host that denies the
    /// notice or the keepalive privilege surfaces that asynchronously; here
    /// the denial is only logged.
    pub fn start(&self, operation_id: &str) -> RestartDirective {
        self.channel_init.call_once(|| {
            let channel = NoticeChannel {
                id: self.config.channel_id.clone(),
                name: self.config.channel_name.clone(),
                importance: self.config.importance,
            };
            if let Err(e) = self.host.ensure_channel(&channel) {
                log::warn!("Failed to create notification channel '{}': {}", channel.id, e);
            }
        });

        let notice = OperationNotice {
            slot: self.config.slot,
            channel_id: self.config.channel_id.clone(),
            title: self.config.title.clone(),
            body: self.config.body.clone(),
            icon: self.config.icon.clone(),
        };

        let mut state = lock_state(&self.state);
        if let NotifierState::Running { operation_id: previous } = &*state {
            log::debug!(
                "Keepalive notice replaced: '{}' supersedes '{}'",
                operation_id,
                previous
            );
        }

        if let Err(e) = self.host.post_notice(&notice) {
            log::warn!("Failed to post operation notice (slot {}): {}", notice.slot, e);
        }
        if let Err(e) = self.host.acquire_keepalive(operation_id) {
            log::warn!("Failed to acquire keepalive for '{}': {}", operation_id, e);
        }

        *state = NotifierState::Running {
            operation_id: operation_id.to_string(),
        };
        log::debug!("Keepalive started for operation '{}'", operation_id);

        RestartDirective::Sticky
    }

    /// Releases the keepalive privilege and removes the status notice.
    ///
    /// Must be called when the operation finishes or fails; omission leaves
    /// the notice visible indefinitely. Calling while idle is a no-op.
    pub fn stop(&self) {
        let mut state = lock_state(&self.state);
        match &*state {
            NotifierState::Idle => {
                log::debug!("Keepalive stop() while idle, ignoring");
                return;
            }
            NotifierState::Running { operation_id } => {
                log::debug!("Keepalive stopping for operation '{}'", operation_id);
            }
        }

        if let Err(e) = self.host.cancel_notice(self.config.slot) {
            log::warn!(
                "Failed to cancel operation notice (slot {}): {}",
                self.config.slot,
                e
            );
        }
        if let Err(e) = self.host.release_keepalive() {
            log::warn!("Failed to release keepalive: {}", e);
        }

        *state = NotifierState::Idle;
    }

    /// Whether an operation notice is currently active.
    pub fn is_running(&self) -> bool {
        matches!(&*lock_state(&self.state), NotifierState::Running { .. })
    }

    /// Identifier of the operation currently holding the notice, if any.
    pub fn current_operation(&self) -> Option<String> {
        match &*lock_state(&self.state) {
            NotifierState::Idle => None,
            NotifierState::Running { operation_id } => Some(operation_id.clone()),
        }
    }
}

// A poisoned state lock only means another thread panicked mid-update; the
// state itself is a plain enum, so recover the guard instead of propagating.
fn lock_state(state: &Mutex<NotifierState>) -> std::sync::MutexGuard<'_, NotifierState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}
