//! Logo compositing: stretch into a square, cut a circle, paste at the center.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::{QrStudioError, Result};

/// Loads a logo image from disk.
pub fn load_logo(path: &Path) -> Result<DynamicImage> {
    log::debug!("Loading logo from {}", path.display());
    image::open(path).map_err(|e| QrStudioError::logo(path, e))
}

/// Side of the logo for a QR image of side `qr_side` at `percent` percent.
pub fn logo_side(qr_side: u32, percent: u32) -> u32 {
    (u64::from(qr_side) * u64::from(percent) / 100) as u32
}

/// Stretches `logo` to `side x side`, then masks everything outside the
/// inscribed circle. Non-square logos keep all of their content.
pub fn circular_logo(logo: &DynamicImage, side: u32) -> RgbaImage {
    if side == 0 {
        return RgbaImage::new(0, 0);
    }

    let mut fitted = logo
        .resize_exact(side, side, FilterType::Lanczos3)
        .into_rgba8();
    apply_circle_mask(&mut fitted);
    fitted
}

/// Keeps the original alpha inside the circle, zero outside.
fn apply_circle_mask(img: &mut RgbaImage) {
    let radius = img.width() as f32 / 2.0;
    let radius_sq = radius * radius;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        if dx * dx + dy * dy > radius_sq {
            pixel.0[3] = 0;
        }
    }
}

/// Top-left corner that centers a `logo_side` square inside `qr_side`.
pub fn centered_offset(qr_side: u32, logo_side: u32) -> u32 {
    qr_side.saturating_sub(logo_side) / 2
}

/// Alpha-composites `logo` onto the center of `qr`.
pub fn overlay_logo(qr: &mut RgbImage, logo: &RgbaImage) {
    if logo.width() == 0 {
        return;
    }

    let offset = i64::from(centered_offset(qr.width(), logo.width()));
    let mut canvas = DynamicImage::ImageRgb8(std::mem::take(qr)).into_rgba8();
    imageops::overlay(&mut canvas, logo, offset, offset);
    *qr = DynamicImage::ImageRgba8(canvas).into_rgb8();
}
