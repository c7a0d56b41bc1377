//! Shared assets for QR Studio.
//!
//! The window icon is rendered by the build script and embedded with
//! `include_bytes!`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let icon_bytes: &[u8] = qrstudio_assets::icon();
//! ```

/// Icon PNG bytes (256x256 RGBA).
pub const ICON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/icon.png"));

/// Returns the application icon as PNG bytes.
#[must_use]
pub const fn icon() -> &'static [u8] {
    ICON
}
