//! Timing and lifecycle tests for the status poller, run against a paused
//! tokio clock so a 120 second cadence can be checked in microseconds.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use paystep_core::events::types::PollPhase;
use paystep_core::processors::{FETCH_ERROR_MESSAGE, PollerConfig, StatusPoller, StatusSource};
use paystep_sdk::client::ClientError;
use paystep_sdk::objects::payment::{PaymentRecord, PaymentState};
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use tokio::sync::Notify;
use tokio::time::advance;

const ORDER_ID: i64 = 42;

fn record(state: PaymentState) -> PaymentRecord {
    PaymentRecord {
        order_id: ORDER_ID,
        xmr_amount: Some(dec!(1.5)),
        address: "888tNkZrPN6JsEgekjMnABU4TBzc2Dt29EPAvkRxbANsAnjyPbb3iQ1YBRk1UXcdRsiKc9dhwMVgN5S9cQUiyoogDavup3H".to_string(),
        payment_state: state,
    }
}

fn api_error() -> ClientError {
    ClientError::Api {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "boom".to_string(),
    }
}

/// Source that replays a script of results, then keeps returning a pending
/// record. Counts every call.
struct ScriptedSource {
    calls: Arc<AtomicUsize>,
    script: Mutex<VecDeque<Result<PaymentRecord, ClientError>>>,
}

impl ScriptedSource {
    fn new(
        calls: Arc<AtomicUsize>,
        script: impl IntoIterator<Item = Result<PaymentRecord, ClientError>>,
    ) -> Self {
        Self {
            calls,
            script: Mutex::new(script.into_iter().collect()),
        }
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch_status(&self, _order_id: i64) -> Result<PaymentRecord, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(record(PaymentState::Pending)))
    }
}

/// Source whose fetches block until the test releases them.
struct GatedSource {
    calls: Arc<AtomicUsize>,
    gate: Arc<Notify>,
}

#[async_trait]
impl StatusSource for GatedSource {
    async fn fetch_status(&self, _order_id: i64) -> Result<PaymentRecord, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(record(PaymentState::Paid))
    }
}

/// Let the spawned poller task run until it blocks again.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_first_fetch_is_immediate_then_fixed_cadence() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = ScriptedSource::new(Arc::clone(&calls), []);
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());

    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let panel = handle.panel();
    assert!(!panel.loading);
    assert_eq!(panel.phase(), PollPhase::Ready);
    assert_eq!(panel.payment, Some(record(PaymentState::Pending)));
    assert_eq!(
        panel.payment_uri.as_deref(),
        Some(
            "monero:888tNkZrPN6JsEgekjMnABU4TBzc2Dt29EPAvkRxbANsAnjyPbb3iQ1YBRk1UXcdRsiKc9dhwMVgN5S9cQUiyoogDavup3H?tx_amount=1.5"
        )
    );

    // Just shy of the interval nothing new happens.
    advance(Duration::from_secs(119)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Crossing it triggers the second fetch.
    advance(Duration::from_secs(2)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    for _ in 0..3 {
        advance(Duration::from_secs(120)).await;
        settle().await;
    }
    assert_eq!(calls.load(Ordering::SeqCst), 5);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_failed_refresh_keeps_previous_record() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = ScriptedSource::new(
        Arc::clone(&calls),
        [
            Ok(record(PaymentState::Unpaid)),
            Err(api_error()),
            Ok(record(PaymentState::Paid)),
        ],
    );
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());

    settle().await;
    assert_eq!(handle.panel().payment, Some(record(PaymentState::Unpaid)));

    advance(Duration::from_secs(121)).await;
    settle().await;
    let panel = handle.panel();
    assert_eq!(panel.phase(), PollPhase::Error);
    assert_eq!(panel.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    // The buyer can still see the address they may already have paid to.
    assert_eq!(panel.payment, Some(record(PaymentState::Unpaid)));
    assert!(panel.payment_uri.is_some());

    // A successful retry clears the error.
    handle.retry();
    settle().await;
    let panel = handle.panel();
    assert_eq!(panel.phase(), PollPhase::Ready);
    assert_eq!(panel.error, None);
    assert_eq!(panel.payment, Some(record(PaymentState::Paid)));
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_observe_only_the_latest_snapshot() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = ScriptedSource::new(
        Arc::clone(&calls),
        [
            Ok(record(PaymentState::Unpaid)),
            Ok(record(PaymentState::Pending)),
            Ok(record(PaymentState::Paid)),
        ],
    );
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());
    let mut rx = handle.subscribe();

    settle().await;
    advance(Duration::from_secs(121)).await;
    settle().await;
    advance(Duration::from_secs(120)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    // Three polls happened while the subscriber never looked; it sees only
    // the final state, not a backlog.
    assert!(rx.has_changed().unwrap());
    let panel = rx.borrow_and_update().clone();
    assert_eq!(panel.payment, Some(record(PaymentState::Paid)));
    assert!(!rx.has_changed().unwrap());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_retry_does_not_move_the_scheduled_poll() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = ScriptedSource::new(Arc::clone(&calls), []);
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());

    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    advance(Duration::from_secs(60)).await;
    handle.retry();
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // The scheduled poll still fires at the original 120s mark.
    advance(Duration::from_secs(59)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    advance(Duration::from_secs(2)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_during_fetch_discards_the_result() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Notify::new());
    let source = GatedSource {
        calls: Arc::clone(&calls),
        gate: Arc::clone(&gate),
    };
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());

    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(handle.panel().phase(), PollPhase::Loading);

    handle.stop();
    settle().await;
    gate.notify_one();
    settle().await;

    // The fetch outcome never reached the panel.
    let panel = handle.panel();
    assert!(panel.loading);
    assert_eq!(panel.payment, None);
    assert_eq!(panel.error, None);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_retry_burst_coalesces_into_one_refresh() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Notify::new());
    let source = GatedSource {
        calls: Arc::clone(&calls),
        gate: Arc::clone(&gate),
    };
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());

    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Three clicks while the first fetch is still in flight.
    handle.retry();
    handle.retry();
    handle.retry();
    gate.notify_one();
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    gate.notify_one();
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_is_idempotent_and_final() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = ScriptedSource::new(Arc::clone(&calls), []);
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());

    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    handle.stop();
    handle.stop();
    settle().await;

    // Neither the schedule nor a retry can revive a stopped poller.
    handle.retry();
    advance(Duration::from_secs(600)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    handle.shutdown().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_the_handle_stops_the_poller() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = ScriptedSource::new(Arc::clone(&calls), []);
    let handle = StatusPoller::spawn(source, ORDER_ID, PollerConfig::default());
    let mut rx = handle.subscribe();

    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    drop(handle);
    settle().await;

    // The poller noticed the closed handle and exited, dropping its sender.
    rx.borrow_and_update();
    assert!(rx.changed().await.is_err());
    advance(Duration::from_secs(600)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
