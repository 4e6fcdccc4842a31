//! State and command plumbing between the poller and its host.
//!
//! The poller publishes [`PaymentPanel`] snapshots through a `watch` channel,
//! so hosts always read the latest state and slow consumers never build a
//! backlog. Commands travel the other way over a small `mpsc` channel and are
//! coalesced by the poll loop.

pub mod channels;
pub mod types;

pub use channels::{
    COMMAND_CHANNEL_BUFFER, PaymentPanelReceiver, PaymentPanelSender, PollerCommandReceiver,
    PollerCommandSender, payment_panel_channel, poller_command_channel,
};

pub use types::{PaymentPanel, PollPhase, PollerCommand};
