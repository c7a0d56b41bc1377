//! User-controlled generation parameters.
//!
//! [`QrStyle`] is everything the form collects: the data to encode, the
//! dark-module color, the export size and format, and the logo overlay.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::QrColor;

pub const MIN_SIZE_PX: u32 = 100;
pub const MAX_SIZE_PX: u32 = 1000;
pub const DEFAULT_SIZE_PX: u32 = 300;

pub const MIN_LOGO_PERCENT: u32 = 10;
pub const MAX_LOGO_PERCENT: u32 = 50;
pub const DEFAULT_LOGO_PERCENT: u32 = 25;

/// Side of the on-screen preview, independent of the export size.
pub const PREVIEW_SIZE_PX: u32 = 300;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Svg,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Png, Self::Jpeg, Self::Svg];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Svg => "SVG",
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
        }
    }

    /// Case-insensitive; `jpg` is accepted as JPEG.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// `qr_code.<ext>`, the name proposed by the save dialog.
    pub fn default_file_name(self) -> String {
        format!("qr_code.{}", self.extension())
    }

    pub(crate) fn image_format(self) -> Option<image::ImageFormat> {
        match self {
            Self::Png => Some(image::ImageFormat::Png),
            Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Svg => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Logo overlay settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoOptions {
    pub enabled: bool,
    pub path: Option<PathBuf>,
    pub size_percent: u32,
}

impl Default for LogoOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            path: None,
            size_percent: DEFAULT_LOGO_PERCENT,
        }
    }
}

impl LogoOptions {
    /// Disabling forgets the chosen file.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.path = None;
        }
    }

    /// The logo to composite, if the overlay is enabled and a file is chosen.
    pub fn active_path(&self) -> Option<&Path> {
        if self.enabled {
            self.path.as_deref()
        } else {
            None
        }
    }

    /// File name shown next to the picker.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Everything needed to produce a QR image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrStyle {
    pub data: String,
    pub color: QrColor,
    pub size_px: u32,
    pub format: ExportFormat,
    pub logo: LogoOptions,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            data: String::new(),
            color: QrColor::BLACK,
            size_px: DEFAULT_SIZE_PX,
            format: ExportFormat::Png,
            logo: LogoOptions::default(),
        }
    }
}

impl QrStyle {
    pub fn trimmed_data(&self) -> &str {
        self.data.trim()
    }

    pub fn has_data(&self) -> bool {
        !self.trimmed_data().is_empty()
    }

    /// Brings numeric fields back into their allowed ranges.
    #[must_use]
    pub fn clamp(mut self) -> Self {
        self.size_px = self.size_px.clamp(MIN_SIZE_PX, MAX_SIZE_PX);
        self.logo.size_percent = self
            .logo
            .size_percent
            .clamp(MIN_LOGO_PERCENT, MAX_LOGO_PERCENT);
        self
    }

    /// Copy suitable for persisting between sessions: no data, no logo file.
    #[must_use]
    pub fn persisted(&self) -> Self {
        Self {
            data: String::new(),
            logo: LogoOptions {
                enabled: false,
                path: None,
                size_percent: self.logo.size_percent,
            },
            ..self.clone()
        }
    }
}
