/// Why the process is going away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeardownReason {
    /// SIGINT (Ctrl+C).
    Interrupt,
    /// SIGTERM (service manager stop, container teardown).
    Terminate,
    /// Teardown explicitly requested by the caller.
    Requested,
}

/// A single firing of the teardown event.
///
/// The event may fire more than once over a process lifetime (a supervisor
/// can stop and later resume an agent before killing it); every firing is
/// dispatched independently to the same subscribers.
#[derive(Debug, Clone, Copy)]
pub struct TeardownEvent {
    /// The reason this firing was triggered.
    pub reason: TeardownReason,
}

/// The phase a handler subscribes in.
///
/// Capture-phase handlers run before any bubble-phase handler within a
/// single dispatch, so work that must start as early as possible during
/// teardown subscribes in the capture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPhase {
    /// Runs first, in subscription order.
    Capture,
    /// Runs after every capture-phase handler, in subscription order.
    Bubble,
}
