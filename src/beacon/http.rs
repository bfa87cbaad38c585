//! HTTP implementation of the beacon-sending capability.

use std::future::Future;

use reqwest::Client;
use tokio::runtime::Handle;
use url::Url;

use super::{error::BeaconError, sender::BeaconSender};
use crate::config::BaseHttpClientConfig;

/// Sends beacons as HTTP POST requests to a fixed collector.
///
/// The request body is the raw payload; no headers are set beyond what the
/// client sets on its own. The runtime handle is captured at construction
/// so `send` stays callable from any thread without ever panicking.
#[derive(Debug, Clone)]
pub struct HttpBeaconSender {
    /// Base URL of the collector; beacon paths are joined onto it.
    collector_url: Url,
    /// Shared HTTP client for beacon requests.
    client: Client,
    /// Runtime that in-flight transmissions are detached onto.
    runtime: Handle,
}

impl HttpBeaconSender {
    /// Creates a new HTTP beacon sender.
    ///
    /// Must be called from within an async runtime; the current runtime is
    /// captured and owns all detached transmissions afterwards.
    pub fn new(collector_url: Url, config: &BaseHttpClientConfig) -> Result<Self, BeaconError> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;
        let runtime = Handle::try_current()?;
        Ok(Self {
            collector_url,
            client,
            runtime,
        })
    }
}

impl BeaconSender for HttpBeaconSender {
    fn send(&self, path: &str, payload: &str) {
        let collector_url = self.collector_url.clone();
        let client = self.client.clone();
        let path = path.to_owned();
        let payload = payload.to_owned();
        // Every failure, from an unjoinable path to a dead collector,
        // lands in the discarded outcome below.
        detach_discarding(&self.runtime, async move {
            let endpoint = collector_url.join(&path)?;
            let _response = client.post(endpoint).body(payload).send().await?;
            Ok(())
        });
    }
}

/// Hands a transmission future to the runtime and discards every outcome.
///
/// The `JoinHandle` is dropped, leaving the task to run detached, and the
/// future's `Result` is consumed without being inspected. Once a request
/// leaves this function nothing in the process observes whether it was
/// delivered; the runtime completes it if it can before the process exits
/// and abandons it otherwise.
fn detach_discarding<F>(runtime: &Handle, transmission: F)
where
    F: Future<Output = Result<(), BeaconError>> + Send + 'static,
{
    let detached = runtime.spawn(async move {
        let _outcome: Result<(), BeaconError> = transmission.await;
    });
    drop(detached);
}
