//! Long-running background tasks.

pub mod discovering_source;
pub mod status_poller;

pub use discovering_source::DiscoveringSource;
pub use status_poller::{
    DEFAULT_POLL_INTERVAL, FETCH_ERROR_MESSAGE, PollerConfig, PollerHandle, StatusPoller,
    StatusSource,
};
