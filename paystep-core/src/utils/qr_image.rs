//! QR code rendering for wallet URIs.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use serde::{Deserialize, Serialize};

/// Prefix of the data URL carried by [`QrImage`].
pub const QR_DATA_SOURCE_PREFIX: &str = "data:image/png;base64";

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("failed to encode qr code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("failed to render qr image: {0}")]
    Render(#[from] image::ImageError),
}

/// A QR code rendered to a PNG data URL, ready for an `img src` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrImage {
    pub data: String,
}

impl QrImage {
    /// Render `data`, typically a wallet URI, as a QR code.
    pub fn from_data(data: &str) -> Result<Self, QrError> {
        let code = QrCode::new(data.as_bytes())?;
        let pixels = code.render::<Luma<u8>>().build();

        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(pixels).write_to(&mut png, ImageFormat::Png)?;

        Ok(Self {
            data: format!(
                "{QR_DATA_SOURCE_PREFIX},{}",
                STANDARD.encode(png.into_inner())
            ),
        })
    }
}
