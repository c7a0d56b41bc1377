//! Domain logic for QR Studio.
//!
//! Encoding is delegated to `qrcode` and pixel work to `image`; this crate
//! wires them together with the parameters collected by the UI:
//!
//! - [`style`]: what the user chose
//! - [`render`]: the generate operation
//! - [`export`]: the save operation
//! - [`config`]: startup defaults from the environment

pub mod color;
pub mod config;
pub mod encode;
pub mod error;
pub mod export;
pub mod logo;
pub mod render;
pub mod style;
pub mod svg;

pub use color::QrColor;
pub use config::StudioConfig;
pub use error::{QrStudioError, Result};
pub use render::{GeneratedQr, generate};
pub use style::{ExportFormat, LogoOptions, PREVIEW_SIZE_PX, QrStyle};

pub use qrstudio_utils::version_info;
