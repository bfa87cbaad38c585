use super::event::{DispatchPhase, TeardownEvent};

/// A teardown event handler.
///
/// Handlers run synchronously on the dispatching task and must not block;
/// anything long-running belongs on the runtime, detached.
pub type TeardownHandler = Box<dyn Fn(&TeardownEvent) + Send + Sync>;

/// A two-phase synchronous event dispatcher for teardown notifications.
///
/// Subscriptions happen during wiring, before the dispatcher is shared;
/// dispatch is immutable and may be called from any task, any number of
/// times.
#[derive(Default)]
pub struct TeardownDispatcher {
    capture: Vec<TeardownHandler>,
    bubble: Vec<TeardownHandler>,
}

impl TeardownDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every subsequent dispatch.
    ///
    /// Subscription order is preserved within a phase.
    pub fn subscribe(&mut self, phase: DispatchPhase, handler: TeardownHandler) {
        match phase {
            DispatchPhase::Capture => self.capture.push(handler),
            DispatchPhase::Bubble => self.bubble.push(handler),
        }
    }

    /// Fires the event: every capture-phase handler, then every
    /// bubble-phase handler.
    ///
    /// Returns only after all handlers have returned. The host may
    /// terminate the process shortly after this returns, which is why
    /// handlers must initiate their work before returning rather than
    /// defer it.
    pub fn dispatch(&self, event: &TeardownEvent) {
        for handler in &self.capture {
            handler(event);
        }
        for handler in &self.bubble {
            handler(event);
        }
    }
}
