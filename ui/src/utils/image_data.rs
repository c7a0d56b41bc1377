//! Raw pixel data handed from the domain crate to egui.
//!
//! Generated QR previews are RGB; logos may carry alpha. [`ImageData`]
//! holds either layout and converts to an `egui::ColorImage` for upload.

use egui::ColorImage;
use image::RgbImage;

/// Decoded pixel data ready for display.
///
/// # Format
///
/// The bytes are expected to be in RGBA format (4 bytes per pixel) or
/// RGB format (3 bytes per pixel). Use `bytes_per_pixel()` to determine
/// the format.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw image bytes (RGBA or RGB)
    pub bytes: Vec<u8>,
}

impl ImageData {
    pub fn new(width: usize, height: usize, bytes: Vec<u8>) -> Self {
        Self {
            width,
            height,
            bytes,
        }
    }

    /// Returns `Some(4)` for RGBA, `Some(3)` for RGB, or `None` if the
    /// byte count doesn't match either layout.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        let pixels = self.width.checked_mul(self.height)?;
        if pixels == 0 {
            return None;
        }

        if pixels.checked_mul(4) == Some(self.bytes.len()) {
            return Some(4);
        }

        if pixels.checked_mul(3) == Some(self.bytes.len()) {
            return Some(3);
        }

        None
    }

    /// Converts to an egui image, or `None` if the layout is invalid.
    pub fn to_color_image(&self) -> Option<ColorImage> {
        let size = [self.width, self.height];
        match self.bytes_per_pixel()? {
            4 => Some(ColorImage::from_rgba_unmultiplied(size, &self.bytes)),
            3 => Some(ColorImage::from_rgb(size, &self.bytes)),
            _ => None,
        }
    }
}

impl From<&RgbImage> for ImageData {
    fn from(img: &RgbImage) -> Self {
        Self::new(
            img.width() as usize,
            img.height() as usize,
            img.as_raw().clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_bytes_per_pixel_rgba() {
        let data = ImageData::new(100, 100, vec![0u8; 100 * 100 * 4]);
        assert_eq!(data.bytes_per_pixel(), Some(4));
    }

    #[test]
    fn test_bytes_per_pixel_rgb() {
        let data = ImageData::new(100, 100, vec![0u8; 100 * 100 * 3]);
        assert_eq!(data.bytes_per_pixel(), Some(3));
    }

    #[test]
    fn test_invalid_layouts() {
        assert_eq!(ImageData::new(100, 100, vec![0u8; 100]).bytes_per_pixel(), None);
        assert_eq!(ImageData::new(0, 100, vec![]).bytes_per_pixel(), None);
        assert!(ImageData::new(10, 10, vec![0u8; 7]).to_color_image().is_none());
    }

    #[test]
    fn test_from_rgb_image() {
        let img = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let data = ImageData::from(&img);
        assert_eq!((data.width, data.height), (3, 2));
        assert_eq!(data.bytes_per_pixel(), Some(3));

        let color = data.to_color_image().unwrap();
        assert_eq!(color.size, [3, 2]);
        assert_eq!(color.pixels[0], egui::Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_rgba_bytes_convert() {
        let bytes = [255, 0, 0, 255].repeat(4);
        let color = ImageData::new(2, 2, bytes).to_color_image().unwrap();
        assert_eq!(color.pixels[3], egui::Color32::RED);
    }
}
