//! The SDK for paystep, a self-hosted checkout widget stack for Monero payments.
//!
//! This crate holds everything a host application needs to talk to a paystep
//! payment service:
//!
//! - [`objects`]: the wire objects exchanged with the payment service
//! - [`uri`]: wallet URI derivation for payment records
//! - [`client`] (feature `client`): HTTP clients for service discovery and
//!   the payment-status endpoint

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
pub mod uri;
