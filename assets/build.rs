//! Build script for qrstudio-assets.
//!
//! Renders the window icon (a QR code of the application name) at build time.

use image::{ImageBuffer, Rgba};
use qrcode::{Color, EcLevel, QrCode};
use std::env;
use std::path::Path;

/// Side of the generated icon in pixels.
const ICON_SIZE: u32 = 256;

/// Quiet zone around the symbol, in modules.
const QUIET_ZONE: u32 = 2;

/// Accent color shared with the UI (indigo).
const ACCENT: Rgba<u8> = Rgba([79, 70, 229, 255]);

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    println!("cargo:rerun-if-changed=build.rs");

    let code = QrCode::with_error_correction_level(b"QR Studio", EcLevel::M)
        .expect("Failed to encode icon QR code");
    let icon = render_icon(&code);

    let out_path = Path::new(&out_dir).join("icon.png");
    icon.save(&out_path)
        .unwrap_or_else(|e| panic!("Failed to save {}: {}", out_path.display(), e));
}

/// Scales the symbol with nearest-neighbour so every module stays crisp.
fn render_icon(code: &QrCode) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let modules = code.width() as u32;
    let total = modules + 2 * QUIET_ZONE;
    let scale = (ICON_SIZE / total).max(1);
    let offset = (ICON_SIZE - total * scale) / 2 + QUIET_ZONE * scale;
    let colors = code.to_colors();

    ImageBuffer::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        if x < offset || y < offset {
            return BACKGROUND;
        }
        let mx = (x - offset) / scale;
        let my = (y - offset) / scale;
        if mx >= modules || my >= modules {
            return BACKGROUND;
        }
        match colors[(my * modules + mx) as usize] {
            Color::Dark => ACCENT,
            Color::Light => BACKGROUND,
        }
    })
}
