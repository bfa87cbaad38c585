//! Integration tests for the exit notification pipeline: dispatcher,
//! notifier, and HTTP beacon sender wired together the way `run` wires
//! them.

use std::{
    net::TcpListener,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use exit_beacon::{
    beacon::{BeaconSender, HttpBeaconSender},
    config::BaseHttpClientConfig,
    lifecycle::{DispatchPhase, TeardownDispatcher, TeardownEvent, TeardownReason},
    notifier::{ExitNotifier, EXIT_BEACON_PATH, EXIT_BEACON_PAYLOAD},
    test_helpers::RecordingSender,
};
use url::Url;

async fn wait_for_match(mock: &mockito::Mock) {
    for _ in 0..250 {
        if mock.matched_async().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("mock not matched within 5s");
}

fn http_sender(url: &str) -> Arc<HttpBeaconSender> {
    Arc::new(
        HttpBeaconSender::new(Url::parse(url).unwrap(), &BaseHttpClientConfig::default()).unwrap(),
    )
}

fn requested() -> TeardownEvent {
    TeardownEvent {
        reason: TeardownReason::Requested,
    }
}

#[tokio::test]
async fn teardown_dispatch_sends_exactly_one_beacon() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/log-exit-beacon")
        .match_body(mockito::Matcher::Exact("1".to_string()))
        .with_status(204)
        .create_async()
        .await;

    let notifier = Arc::new(ExitNotifier::new(Some(http_sender(&server.url()))));
    let mut dispatcher = TeardownDispatcher::new();
    notifier.subscribe(&mut dispatcher);

    dispatcher.dispatch(&requested());

    wait_for_match(&mock).await;
    mock.assert_async().await;
}

#[tokio::test]
async fn each_teardown_firing_is_an_independent_attempt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/log-exit-beacon")
        .match_body(mockito::Matcher::Exact("1".to_string()))
        .with_status(204)
        .expect(2)
        .create_async()
        .await;

    let notifier = Arc::new(ExitNotifier::new(Some(http_sender(&server.url()))));
    let mut dispatcher = TeardownDispatcher::new();
    notifier.subscribe(&mut dispatcher);

    dispatcher.dispatch(&requested());
    dispatcher.dispatch(&requested());

    wait_for_match(&mock).await;
    mock.assert_async().await;
}

#[tokio::test]
async fn notifier_runs_before_bubble_subscribers() {
    let order = Arc::new(Mutex::new(Vec::new()));

    // The notifier transmits through a recording double whose send also
    // stamps the order log, standing in for the network layer.
    struct OrderedSender {
        order: Arc<Mutex<Vec<&'static str>>>,
    }
    impl BeaconSender for OrderedSender {
        fn send(&self, _path: &str, _payload: &str) {
            self.order.lock().unwrap().push("beacon");
        }
    }

    let sender = Arc::new(OrderedSender {
        order: Arc::clone(&order),
    });
    let notifier = Arc::new(ExitNotifier::new(Some(sender)));
    let mut dispatcher = TeardownDispatcher::new();

    // An inner subscriber registered before the notifier still runs after
    // it: phase beats subscription order.
    let bubble_order = Arc::clone(&order);
    dispatcher.subscribe(
        DispatchPhase::Bubble,
        Box::new(move |_event| bubble_order.lock().unwrap().push("inner")),
    );
    notifier.subscribe(&mut dispatcher);

    dispatcher.dispatch(&requested());

    assert_eq!(*order.lock().unwrap(), vec!["beacon", "inner"]);
}

#[tokio::test]
async fn dispatch_records_fixed_path_and_payload() {
    let sender = Arc::new(RecordingSender::default());
    let notifier = Arc::new(ExitNotifier::new(Some(sender.clone())));
    let mut dispatcher = TeardownDispatcher::new();
    notifier.subscribe(&mut dispatcher);

    dispatcher.dispatch(&requested());

    assert_eq!(
        *sender.calls.lock().unwrap(),
        vec![(EXIT_BEACON_PATH.to_string(), EXIT_BEACON_PAYLOAD.to_string())]
    );
}

#[tokio::test]
async fn dispatch_without_capability_completes_silently() {
    let notifier = Arc::new(ExitNotifier::new(None));
    let mut dispatcher = TeardownDispatcher::new();
    notifier.subscribe(&mut dispatcher);

    let reached = Arc::new(Mutex::new(false));
    let reached_clone = Arc::clone(&reached);
    dispatcher.subscribe(
        DispatchPhase::Bubble,
        Box::new(move |_event| *reached_clone.lock().unwrap() = true),
    );

    dispatcher.dispatch(&requested());

    // The missing capability never disturbs the rest of the dispatch.
    assert!(*reached.lock().unwrap());
}

#[tokio::test]
async fn beacon_failure_does_not_disturb_other_subscribers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/log-exit-beacon")
        .with_status(500)
        .create_async()
        .await;

    let notifier = Arc::new(ExitNotifier::new(Some(http_sender(&server.url()))));
    let mut dispatcher = TeardownDispatcher::new();
    notifier.subscribe(&mut dispatcher);

    let reached = Arc::new(Mutex::new(false));
    let reached_clone = Arc::clone(&reached);
    dispatcher.subscribe(
        DispatchPhase::Bubble,
        Box::new(move |_event| *reached_clone.lock().unwrap() = true),
    );

    dispatcher.dispatch(&requested());

    assert!(*reached.lock().unwrap());
    wait_for_match(&mock).await;
}

#[tokio::test]
async fn notify_exit_returns_without_a_network_round_trip() {
    // A listener that accepts connections into its backlog but never
    // responds: any blocking send would hang for the request timeout.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let collector = format!("http://{}", listener.local_addr().unwrap());

    let notifier = ExitNotifier::new(Some(http_sender(&collector)));

    let start = Instant::now();
    notifier.notify_exit();
    let elapsed = start.elapsed();

    assert!(
        elapsed < Duration::from_secs(1),
        "notify_exit blocked for {elapsed:?}"
    );
}
