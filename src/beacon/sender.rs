/// The non-blocking, best-effort send capability.
///
/// This trait is the seam between the notifier and the network: production
/// wiring injects an [`HttpBeaconSender`](super::HttpBeaconSender), test
/// harnesses inject a recording double.
pub trait BeaconSender: Send + Sync {
    /// Initiates one transmission of `payload` to `path` on the collector.
    ///
    /// Returns without waiting for a network round trip. Implementations
    /// must absorb every failure without panicking or logging. At most one
    /// outbound transmission is attempted per call.
    fn send(&self, path: &str, payload: &str);
}
