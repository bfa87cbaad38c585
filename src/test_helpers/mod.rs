//! Shared test doubles for exercising the notification pipeline.

use std::sync::Mutex;

use crate::beacon::BeaconSender;

/// A [`BeaconSender`] double that records every call instead of sending.
#[derive(Default)]
pub struct RecordingSender {
    /// The `(path, payload)` of every `send` call, in order.
    pub calls: Mutex<Vec<(String, String)>>,
}

impl RecordingSender {
    /// Number of transmissions attempted so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl BeaconSender for RecordingSender {
    fn send(&self, path: &str, payload: &str) {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), payload.to_string()));
    }
}
