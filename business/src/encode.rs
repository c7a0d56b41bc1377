//! Data-to-bitmap step.
//!
//! Encoding is delegated to the `qrcode` crate: error correction level H,
//! smallest version that fits. Rendering adds a quiet zone of
//! [`BORDER_MODULES`] and draws every module as a [`BOX_SIZE`] pixel square.

use image::{Rgb, RgbImage};
use qrcode::{EcLevel, QrCode};

use crate::color::QrColor;
use crate::error::{QrStudioError, Result};

/// Quiet zone, in modules.
pub const BORDER_MODULES: usize = 4;

/// Pixels per module in the raw rendering.
pub const BOX_SIZE: u32 = 10;

/// The module grid of an encoded symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    /// Modules per side, without the quiet zone.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Modules per side, including the quiet zone on both sides.
    pub fn width_with_border(&self) -> usize {
        self.width + 2 * BORDER_MODULES
    }

    /// QR version implied by the width (`17 + 4 * version`).
    pub fn version(&self) -> usize {
        (self.width - 17) / 4
    }

    /// Whether the module at `(x, y)` is dark; out-of-range positions are
    /// light, which is what the quiet zone needs.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    pub fn dark_count(&self) -> usize {
        self.dark.iter().filter(|d| **d).count()
    }
}

/// Encodes trimmed `data` at error correction level H.
pub fn encode_matrix(data: &str) -> Result<QrMatrix> {
    let data = data.trim();
    if data.is_empty() {
        return Err(QrStudioError::EmptyData);
    }

    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?;
    let width = code.width();
    let dark = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();

    log::debug!("Encoded {} bytes into a {width}x{width} symbol", data.len());

    Ok(QrMatrix { width, dark })
}

/// Draws the symbol with `color` modules on a white background.
pub fn render_modules(matrix: &QrMatrix, color: QrColor) -> RgbImage {
    let side = matrix.width_with_border() as u32 * BOX_SIZE;
    let dark: Rgb<u8> = color.into();
    let light: Rgb<u8> = QrColor::WHITE.into();

    RgbImage::from_fn(side, side, |x, y| {
        let mx = (x / BOX_SIZE) as usize;
        let my = (y / BOX_SIZE) as usize;
        let inside = |m: usize| m.checked_sub(BORDER_MODULES);
        match (inside(mx), inside(my)) {
            (Some(qx), Some(qy)) if matrix.is_dark(qx, qy) => dark,
            _ => light,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_is_rejected() {
        assert!(matches!(encode_matrix(""), Err(QrStudioError::EmptyData)));
        assert!(matches!(encode_matrix("   \n"), Err(QrStudioError::EmptyData)));
    }

    #[test]
    fn test_short_text_fits_small_version() {
        let matrix = encode_matrix("hello").unwrap();
        // 5 bytes at level H fit in version 1
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.version(), 1);
        assert_eq!(matrix.width_with_border(), 29);
    }

    #[test]
    fn test_version_grows_with_data() {
        let small = encode_matrix("https://example.com").unwrap();
        let large = encode_matrix(&"x".repeat(500)).unwrap();
        assert!(large.width() > small.width());
    }

    #[test]
    fn test_too_much_data_fails() {
        // Version 40-H holds at most 1273 bytes
        let err = encode_matrix(&"x".repeat(3000)).unwrap_err();
        assert!(matches!(err, QrStudioError::Encode(_)));
    }

    #[test]
    fn test_finder_pattern_corner_is_dark() {
        let matrix = encode_matrix("hello").unwrap();
        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(matrix.width(), 0));
    }

    #[test]
    fn test_render_modules_geometry_and_colors() {
        let matrix = encode_matrix("hello").unwrap();
        let red = QrColor::new(255, 0, 0);
        let img = render_modules(&matrix, red);

        assert_eq!(img.dimensions(), (290, 290));
        // Quiet zone is white
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(39, 39).0, [255, 255, 255]);
        // First finder module starts right after the border
        assert_eq!(img.get_pixel(40, 40).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(49, 49).0, [255, 0, 0]);
    }

    #[test]
    fn test_render_only_uses_two_colors() {
        let matrix = encode_matrix("two colors only").unwrap();
        let img = render_modules(&matrix, QrColor::new(0, 0, 128));
        assert!(
            img.pixels()
                .all(|p| p.0 == [255, 255, 255] || p.0 == [0, 0, 128])
        );
    }
}
