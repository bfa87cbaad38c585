//! Process signal handling for teardown detection.

use tokio::signal;

use super::event::TeardownReason;

/// Waits for the first teardown signal delivered to the process.
///
/// Resolves on SIGINT (Ctrl+C) everywhere and additionally on SIGTERM on
/// Unix. The caller dispatches the resulting event itself, so test
/// harnesses can drive dispatch without raising real signals.
pub async fn wait_for_teardown() -> TeardownReason {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to register SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => TeardownReason::Interrupt,
        _ = terminate => TeardownReason::Terminate,
    }
}
