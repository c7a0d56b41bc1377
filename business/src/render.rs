//! The generate operation: style in, finished image out.

use image::imageops::{self, FilterType};
use image::{RgbImage, RgbaImage};

use crate::encode::{QrMatrix, encode_matrix, render_modules};
use crate::error::Result;
use crate::logo::{circular_logo, load_logo, logo_side, overlay_logo};
use crate::style::{PREVIEW_SIZE_PX, QrStyle};
use crate::svg::{SvgLogo, render_svg};

/// A generated QR code, ready to preview or export.
#[derive(Debug, Clone)]
pub struct GeneratedQr {
    style: QrStyle,
    matrix: QrMatrix,
    image: RgbImage,
    logo: Option<RgbaImage>,
}

impl GeneratedQr {
    /// The style this code was generated from.
    pub fn style(&self) -> &QrStyle {
        &self.style
    }

    pub fn matrix(&self) -> &QrMatrix {
        &self.matrix
    }

    /// Final raster at `style.size_px`.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Downscaled copy for on-screen display.
    pub fn preview(&self) -> RgbImage {
        imageops::resize(
            &self.image,
            PREVIEW_SIZE_PX,
            PREVIEW_SIZE_PX,
            FilterType::Lanczos3,
        )
    }

    /// Vector rendering at `style.size_px`.
    pub fn svg(&self) -> Result<String> {
        let logo = self.logo.as_ref().map(|image| SvgLogo {
            image,
            fraction: f64::from(self.style.logo.size_percent) / 100.0,
        });
        render_svg(&self.matrix, self.style.color, self.style.size_px, logo)
    }
}

/// Encodes, colors, optionally adds the logo and scales to the export size.
pub fn generate(style: &QrStyle) -> Result<GeneratedQr> {
    let style = style.clone().clamp();
    let matrix = encode_matrix(style.trimmed_data())?;
    let mut image = render_modules(&matrix, style.color);

    let logo = match style.logo.active_path() {
        Some(path) => {
            let source = load_logo(path)?;
            let side = logo_side(image.width(), style.logo.size_percent);
            let logo = circular_logo(&source, side);
            overlay_logo(&mut image, &logo);
            Some(logo)
        }
        None => None,
    };

    let image = if image.width() == style.size_px {
        image
    } else {
        imageops::resize(&image, style.size_px, style.size_px, FilterType::Lanczos3)
    };

    log::info!(
        "Generated version {} QR code at {}px (logo: {})",
        matrix.version(),
        style.size_px,
        logo.is_some()
    );

    Ok(GeneratedQr {
        style,
        matrix,
        image,
        logo,
    })
}
