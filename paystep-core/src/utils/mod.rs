//! Shared utilities.

pub mod qr_image;

pub use qr_image::{QR_DATA_SOURCE_PREFIX, QrError, QrImage};
