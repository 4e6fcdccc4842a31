//! Background poller for payment status.
//!
//! [`StatusPoller::spawn`] starts a task that fetches the payment record for
//! one order, first immediately and then on a fixed cadence, publishing every
//! observed state into a watch channel as a [`PaymentPanel`]. The returned
//! [`PollerHandle`] is the only way to talk to the task: subscribe to panel
//! updates, request an out-of-band refresh, or stop it.

use std::ops::ControlFlow;
use std::time::Duration;

use async_trait::async_trait;
use paystep_sdk::client::ClientError;
use paystep_sdk::objects::payment::PaymentRecord;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::events::channels::{
    PaymentPanelReceiver, PaymentPanelSender, PollerCommandReceiver, PollerCommandSender,
    payment_panel_channel, poller_command_channel,
};
use crate::events::types::{PaymentPanel, PollerCommand};

/// Cadence between scheduled status fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(120);

/// Error shown on the panel when a fetch fails. Intentionally generic; the
/// underlying error goes to the log, not to the buyer.
pub const FETCH_ERROR_MESSAGE: &str = "Unable to load payment details. Please try again.";

/// Tuning knobs for [`StatusPoller`].
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Delay between the end of one scheduled fetch and the start of the
    /// next.
    pub poll_interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Where the poller gets payment records from.
///
/// The poller calls this once per poll and never caches anything between
/// calls, so a source is free to re-resolve its backend every time.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self, order_id: i64) -> Result<PaymentRecord, ClientError>;
}

// ---------------------------------------------------------------------------
// StatusPoller
// ---------------------------------------------------------------------------

/// Polls a [`StatusSource`] for one order and publishes [`PaymentPanel`]
/// snapshots.
pub struct StatusPoller<S> {
    source: S,
    order_id: i64,
    config: PollerConfig,
    panel_tx: PaymentPanelSender,
    command_rx: PollerCommandReceiver,
    shutdown_rx: watch::Receiver<bool>,
}

impl<S: StatusSource + 'static> StatusPoller<S> {
    /// Spawns the polling task and returns its handle.
    pub fn spawn(source: S, order_id: i64, config: PollerConfig) -> PollerHandle {
        let (command_tx, command_rx) = poller_command_channel();
        let (panel_tx, panel_rx) = payment_panel_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let poller = Self {
            source,
            order_id,
            config,
            panel_tx,
            command_rx,
            shutdown_rx,
        };
        let task = tokio::spawn(poller.run());

        PollerHandle {
            panel_rx,
            command_tx,
            shutdown_tx,
            task,
        }
    }

    async fn run(mut self) {
        info!(
            order_id = self.order_id,
            interval_secs = self.config.poll_interval.as_secs(),
            "StatusPoller started"
        );

        if self.poll_once().await.is_break() {
            info!(order_id = self.order_id, "StatusPoller shutdown complete");
            return;
        }
        let mut next_poll = Box::pin(tokio::time::sleep(self.config.poll_interval));

        loop {
            tokio::select! {
                biased;
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        break;
                    }
                }
                Some(PollerCommand::Retry) = self.command_rx.recv() => {
                    // A burst of retries collapses into one refresh.
                    self.drain_commands();
                    if self.poll_once().await.is_break() {
                        break;
                    }
                    // A manual refresh leaves the scheduled poll where it was.
                }
                () = next_poll.as_mut() => {
                    if self.poll_once().await.is_break() {
                        break;
                    }
                    next_poll = Box::pin(tokio::time::sleep(self.config.poll_interval));
                }
            }
        }

        info!(order_id = self.order_id, "StatusPoller shutdown complete");
    }

    /// Runs one fetch and publishes the outcome.
    ///
    /// Returns `Break` when a stop arrived mid-fetch; the result of an
    /// abandoned fetch is never published.
    async fn poll_once(&mut self) -> ControlFlow<()> {
        self.publish(|panel| panel.loading = true);

        let fetch = self.source.fetch_status(self.order_id);
        tokio::pin!(fetch);
        let result = loop {
            tokio::select! {
                biased;
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        debug!(order_id = self.order_id, "Fetch abandoned, shutdown signaled");
                        return ControlFlow::Break(());
                    }
                }
                result = &mut fetch => break result,
            }
        };

        match result {
            Ok(payment) => {
                let changed = self.panel_tx.borrow().payment.as_ref() != Some(&payment);
                if changed {
                    info!(
                        order_id = self.order_id,
                        state = %payment.payment_state,
                        "Payment status updated"
                    );
                }
                let payment_uri = payment.wallet_uri();
                self.publish(move |panel| {
                    panel.loading = false;
                    panel.error = None;
                    panel.payment_uri = Some(payment_uri);
                    panel.payment = Some(payment);
                });
            }
            Err(error) => {
                warn!(order_id = self.order_id, error = %error, "Status fetch failed");
                // The last good record stays on the panel next to the error.
                self.publish(|panel| {
                    panel.loading = false;
                    panel.error = Some(FETCH_ERROR_MESSAGE.to_string());
                });
            }
        }
        ControlFlow::Continue(())
    }

    fn publish(&self, update: impl FnOnce(&mut PaymentPanel)) {
        self.panel_tx.send_modify(update);
    }

    fn drain_commands(&mut self) {
        while self.command_rx.try_recv().is_ok() {}
    }
}

// ---------------------------------------------------------------------------
// PollerHandle
// ---------------------------------------------------------------------------

/// Handle to a running [`StatusPoller`].
///
/// Dropping the handle stops the poller: the task notices its channels
/// closing and exits without publishing anything further.
pub struct PollerHandle {
    panel_rx: PaymentPanelReceiver,
    command_tx: PollerCommandSender,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// A receiver of panel snapshots. Receivers only ever see the latest
    /// state; intermediate snapshots may be skipped under load.
    pub fn subscribe(&self) -> PaymentPanelReceiver {
        self.panel_rx.clone()
    }

    /// The current panel snapshot.
    pub fn panel(&self) -> PaymentPanel {
        self.panel_rx.borrow().clone()
    }

    /// Requests an immediate out-of-band refresh. A no-op once the poller
    /// has stopped, and bursts beyond the command buffer are dropped since
    /// one refresh serves them all.
    pub fn retry(&self) {
        let _ = self.command_tx.try_send(PollerCommand::Retry);
    }

    /// Stops the poller. Idempotent; an in-flight fetch is abandoned and its
    /// result discarded.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send_replace(true);
    }

    /// Stops the poller and waits for the task to finish.
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.task.await;
    }
}
