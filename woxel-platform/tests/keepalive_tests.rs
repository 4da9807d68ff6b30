use std::sync::{Arc, Mutex};
use std::thread;

use woxel_platform::{
    BridgeError, Importance, KeepaliveNotifier, NoticeChannel, NoticeConfig, NotificationHost,
    OperationNotice, RestartDirective,
};

// --- Recording host ---

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostCall {
    EnsureChannel {
        id: String,
        importance: Importance,
    },
    PostNotice {
        slot: u32,
        title: String,
        body: String,
    },
    CancelNotice {
        slot: u32,
    },
    AcquireKeepalive {
        operation_id: String,
    },
    ReleaseKeepalive,
}

/// Records every host interaction; cloned handles share the same log so the
/// test can assert on calls after moving a clone into the notifier.
#[derive(Clone, Default)]
struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl RecordingHost {
    fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn channel_creations(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, HostCall::EnsureChannel { .. }))
            .count()
    }

    /// Replays posts and cancels to compute which slot is still visible.
    fn visible_slot(&self) -> Option<u32> {
        let mut visible = None;
        for call in self.calls() {
            match call {
                HostCall::PostNotice { slot, .. } => visible = Some(slot),
                HostCall::CancelNotice { slot } if visible == Some(slot) => visible = None,
                _ => {}
            }
        }
        visible
    }

    /// Replays acquire/release to compute whether keepalive is held.
    fn keepalive_active(&self) -> bool {
        let mut active = false;
        for call in self.calls() {
            match call {
                HostCall::AcquireKeepalive { .. } => active = true,
                HostCall::ReleaseKeepalive => active = false,
                _ => {}
            }
        }
        active
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl NotificationHost for RecordingHost {
    fn ensure_channel(&self, channel: &NoticeChannel) -> woxel_platform::BridgeResult<()> {
        self.record(HostCall::EnsureChannel {
            id: channel.id.clone(),
            importance: channel.importance,
        });
        Ok(())
    }

    fn post_notice(&self, notice: &OperationNotice) -> woxel_platform::BridgeResult<()> {
        self.record(HostCall::PostNotice {
            slot: notice.slot,
            title: notice.title.clone(),
            body: notice.body.clone(),
        });
        Ok(())
    }

    fn cancel_notice(&self, slot: u32) -> woxel_platform::BridgeResult<()> {
        self.record(HostCall::CancelNotice { slot });
        Ok(())
    }

    fn acquire_keepalive(&self, operation_id: &str) -> woxel_platform::BridgeResult<()> {
        self.record(HostCall::AcquireKeepalive {
            operation_id: operation_id.to_string(),
        });
        Ok(())
    }

    fn release_keepalive(&self) -> woxel_platform::BridgeResult<()> {
        self.record(HostCall::ReleaseKeepalive);
        Ok(())
    }
}

/// Host whose every method fails, simulating denied notification permission.
#[derive(Clone, Default)]
struct DenyingHost;

impl NotificationHost for DenyingHost {
    fn ensure_channel(&self, _: &NoticeChannel) -> woxel_platform::BridgeResult<()> {
        Err(BridgeError::Notification("denied".to_string()))
    }

    fn post_notice(&self, _: &OperationNotice) -> woxel_platform::BridgeResult<()> {
        Err(BridgeError::Notification("denied".to_string()))
    }

    fn cancel_notice(&self, _: u32) -> woxel_platform::BridgeResult<()> {
        Err(BridgeError::Notification("denied".to_string()))
    }

    fn acquire_keepalive(&self, _: &str) -> woxel_platform::BridgeResult<()> {
        Err(BridgeError::Notification("denied".to_string()))
    }

    fn release_keepalive(&self) -> woxel_platform::BridgeResult<()> {
        Err(BridgeError::Notification("denied".to_string()))
    }
}

// --- Tests ---

#[test]
fn start_stop_scenario_leaves_no_notice() {
    let host = RecordingHost::default();
    let notifier = KeepaliveNotifier::new(host.clone(), NoticeConfig::default()).unwrap();

    let directive = notifier.start("copy-42");
    assert_eq!(directive, RestartDirective::Sticky);
    assert_eq!(host.visible_slot(), Some(1001));
    assert!(host.keepalive_active());
    assert!(notifier.is_running());
    assert_eq!(notifier.current_operation().as_deref(), Some("copy-42"));

    notifier.stop();
    assert_eq!(host.visible_slot(), None);
    assert!(!host.keepalive_active());
    assert!(!notifier.is_running());
    assert_eq!(notifier.current_operation(), None);
}

#[test]
fn channel_is_created_exactly_once_under_concurrent_starts() {
    let host = RecordingHost::default();
    let notifier =
        Arc::new(KeepaliveNotifier::new(host.clone(), NoticeConfig::default()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let notifier = Arc::clone(&notifier);
            thread::spawn(move || notifier.start(&format!("op-{i}")))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), RestartDirective::Sticky);
    }

    assert_eq!(host.channel_creations(), 1);

    // Channel creation precedes the first notice.
    let calls = host.calls();
    let first_ensure = calls
        .iter()
        .position(|c| matches!(c, HostCall::EnsureChannel { .. }))
        .unwrap();
    let first_post = calls
        .iter()
        .position(|c| matches!(c, HostCall::PostNotice { .. }))
        .unwrap();
    assert!(first_ensure < first_post);
}

#[test]
fn channel_importance_is_low() {
    let host = RecordingHost::default();
    let notifier = KeepaliveNotifier::new(host.clone(), NoticeConfig::default()).unwrap();
    notifier.start("op-1");

    assert!(host.calls().iter().any(|c| matches!(
        c,
        HostCall::EnsureChannel {
            importance: Importance::Low,
            ..
        }
    )));
}

#[test]
fn second_start_replaces_rather_than_stacks() {
    let host = RecordingHost::default();
    let notifier = KeepaliveNotifier::new(host.clone(), NoticeConfig::default()).unwrap();

    notifier.start("copy-1");
    notifier.start("move-2");

    let posts: Vec<u32> = host
        .calls()
        .iter()
        .filter_map(|c| match c {
            HostCall::PostNotice { slot, .. } => Some(*slot),
            _ => None,
        })
        .collect();
    // Both posts target the same fixed slot, so the host replaces in place;
    // only one visible indicator can exist at a time.
    assert_eq!(posts, vec![1001, 1001]);
    assert_eq!(host.visible_slot(), Some(1001));
    assert_eq!(notifier.current_operation().as_deref(), Some("move-2"));

    notifier.stop();
    assert_eq!(host.visible_slot(), None);
}

#[test]
fn stop_while_idle_is_a_noop() {
    let host = RecordingHost::default();
    let notifier = KeepaliveNotifier::new(host.clone(), NoticeConfig::default()).unwrap();

    notifier.stop();
    assert!(host.calls().is_empty());
}

#[test]
fn notice_content_comes_from_config() {
    let host = RecordingHost::default();
    let notifier = KeepaliveNotifier::new(host.clone(), NoticeConfig::default()).unwrap();
    notifier.start("op-1");

    assert!(host.calls().iter().any(|c| matches!(
        c,
        HostCall::PostNotice { slot: 1001, title, body }
            if title == "Woxel" && body == "File operation in progress"
    )));
}

#[test]
fn denied_host_never_panics_and_still_returns_sticky() {
    let notifier = KeepaliveNotifier::new(DenyingHost, NoticeConfig::default()).unwrap();

    assert_eq!(notifier.start("copy-42"), RestartDirective::Sticky);
    assert!(notifier.is_running());
    notifier.stop();
    assert!(!notifier.is_running());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = NoticeConfig {
        slot: 0,
        ..Default::default()
    };
    assert!(KeepaliveNotifier::new(RecordingHost::default(), config).is_err());
}

#[test]
fn notice_config_round_trips_through_serde() {
    let config = NoticeConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: NoticeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.slot, config.slot);
    assert_eq!(back.channel_id, config.channel_id);
    assert_eq!(back.importance, config.importance);
}
