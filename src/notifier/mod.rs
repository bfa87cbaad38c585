//! # Exit Notifier
//!
//! The exit notifier informs a remote collector that the local process is
//! going away. It posts a fixed one-character payload to a fixed path,
//! with at most one transmission attempt per teardown firing.
//!
//! The notifier holds no state and consults no outcome. Whether a beacon
//! was delivered, dropped, or never attempted is indistinguishable from
//! the inside of the process; teardown proceeds identically in all three
//! cases. Both of its collaborators are injected: the send capability as
//! an optional [`BeaconSender`], the event source as a
//! [`TeardownDispatcher`] it subscribes itself onto.

use std::sync::Arc;

use crate::{
    beacon::BeaconSender,
    lifecycle::{DispatchPhase, TeardownDispatcher},
};

/// Collector path that exit beacons are posted to.
pub const EXIT_BEACON_PATH: &str = "/log-exit-beacon";

/// The beacon payload: a literal `1`, nothing richer.
pub const EXIT_BEACON_PAYLOAD: &str = "1";

/// Best-effort teardown notification.
pub struct ExitNotifier {
    /// The injected send capability; `None` when the environment has none,
    /// in which case notifications are skipped entirely.
    sender: Option<Arc<dyn BeaconSender>>,
}

impl ExitNotifier {
    /// Creates a notifier around an optional send capability.
    pub fn new(sender: Option<Arc<dyn BeaconSender>>) -> Self {
        Self { sender }
    }

    /// Attempts to inform the collector that the process is going away.
    ///
    /// Initiates at most one transmission and returns immediately; the
    /// outcome is not observable. With no capability wired this is a
    /// no-op. Calls are independent: the notifier keeps no record of
    /// earlier attempts.
    pub fn notify_exit(&self) {
        if let Some(sender) = &self.sender {
            sender.send(EXIT_BEACON_PATH, EXIT_BEACON_PAYLOAD);
        }
    }

    /// Subscribes `notify_exit` onto the teardown dispatcher in the
    /// capture phase, ahead of every bubble-phase subscriber, so the
    /// notification attempt happens as early in teardown as possible.
    ///
    /// Called once during wiring; the subscription lives as long as the
    /// dispatcher.
    pub fn subscribe(self: &Arc<Self>, dispatcher: &mut TeardownDispatcher) {
        let notifier = Arc::clone(self);
        dispatcher.subscribe(
            DispatchPhase::Capture,
            Box::new(move |_event| notifier.notify_exit()),
        );
    }
}
