//! Channel aliases and constructors wiring the poller to its host.

use tokio::sync::{mpsc, watch};

use crate::events::types::{PaymentPanel, PollerCommand};

/// Buffer size for the command channel. Commands are coalesced by the poll
/// loop, so a small buffer is enough.
pub const COMMAND_CHANNEL_BUFFER: usize = 8;

pub type PollerCommandSender = mpsc::Sender<PollerCommand>;
pub type PollerCommandReceiver = mpsc::Receiver<PollerCommand>;

pub type PaymentPanelSender = watch::Sender<PaymentPanel>;
pub type PaymentPanelReceiver = watch::Receiver<PaymentPanel>;

/// Create the command channel used by [`PollerHandle::retry`].
///
/// [`PollerHandle::retry`]: crate::processors::status_poller::PollerHandle::retry
pub fn poller_command_channel() -> (PollerCommandSender, PollerCommandReceiver) {
    mpsc::channel(COMMAND_CHANNEL_BUFFER)
}

/// Create the panel channel, initialized to the idle panel.
pub fn payment_panel_channel() -> (PaymentPanelSender, PaymentPanelReceiver) {
    watch::channel(PaymentPanel::default())
}
