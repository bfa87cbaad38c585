//! Error types for beacon transmission.

use thiserror::Error;

/// Defines the possible errors of a single beacon transmission.
///
/// These never cross the `BeaconSender` boundary; they exist to give the
/// internal send future a typed outcome that is then discarded on purpose.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// The beacon path could not be joined onto the collector URL.
    #[error("Invalid beacon endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// An error from the underlying `reqwest` client.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// No runtime was available to detach the transmission onto.
    #[error("No async runtime available: {0}")]
    Runtime(#[from] tokio::runtime::TryCurrentError),
}
