//! Startup configuration read from the environment.
//!
//! | variable                | default   |
//! |-------------------------|-----------|
//! | `QRSTUDIO_COLOR`        | `#000000` |
//! | `QRSTUDIO_SIZE`         | `300`     |
//! | `QRSTUDIO_FORMAT`       | `png`     |
//! | `QRSTUDIO_LOGO_PERCENT` | `25`      |
//! | `QRSTUDIO_FONT`         | unset     |
//! | `QRSTUDIO_OUTPUT_DIR`   | unset     |

use std::env::vars;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::color::QrColor;
use crate::style::{
    DEFAULT_LOGO_PERCENT, DEFAULT_SIZE_PX, ExportFormat, LogoOptions, MAX_LOGO_PERCENT,
    MAX_SIZE_PX, MIN_LOGO_PERCENT, MIN_SIZE_PX, QrStyle,
};

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    qrstudio_color: Option<String>,
    qrstudio_size: Option<u32>,
    qrstudio_format: Option<String>,
    qrstudio_logo_percent: Option<u32>,
    qrstudio_font: Option<PathBuf>,
    qrstudio_output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    color: QrColor,
    size_px: u32,
    format: ExportFormat,
    logo_percent: u32,
    font: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            color: QrColor::BLACK,
            size_px: DEFAULT_SIZE_PX,
            format: ExportFormat::Png,
            logo_percent: DEFAULT_LOGO_PERCENT,
            font: None,
            output_dir: None,
        }
    }
}

impl StudioConfig {
    /// Reads the configuration from environment variables and applies defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    /// Same as [`StudioConfig::init`] over an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
            .collect();
        let raw: RawConfig = serde_env::from_iter(pairs)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            qrstudio_color,
            qrstudio_size,
            qrstudio_format,
            qrstudio_logo_percent,
            qrstudio_font,
            qrstudio_output_dir,
        } = raw;

        let color = match qrstudio_color {
            Some(hex) => match QrColor::from_hex(&hex) {
                Ok(color) => color,
                Err(e) => anyhow::bail!("QRSTUDIO_COLOR is not a valid color: {e}"),
            },
            None => QrColor::BLACK,
        };

        let format = match qrstudio_format {
            Some(name) => match ExportFormat::from_extension(name.trim()) {
                Some(format) => format,
                None => anyhow::bail!(
                    "QRSTUDIO_FORMAT must be one of png, jpeg, jpg, svg (got {name:?})"
                ),
            },
            None => ExportFormat::Png,
        };

        let size_px = match qrstudio_size {
            Some(size) => {
                let clamped = size.clamp(MIN_SIZE_PX, MAX_SIZE_PX);
                if clamped != size {
                    info!("QRSTUDIO_SIZE {size} out of range, using {clamped}");
                }
                clamped
            }
            None => DEFAULT_SIZE_PX,
        };

        let logo_percent = match qrstudio_logo_percent {
            Some(percent) => {
                let clamped = percent.clamp(MIN_LOGO_PERCENT, MAX_LOGO_PERCENT);
                if clamped != percent {
                    info!("QRSTUDIO_LOGO_PERCENT {percent} out of range, using {clamped}");
                }
                clamped
            }
            None => DEFAULT_LOGO_PERCENT,
        };

        let config = Self {
            color,
            size_px,
            format,
            logo_percent,
            font: qrstudio_font,
            output_dir: qrstudio_output_dir,
        };
        info!(
            "Using color {}, size {}px, format {}, logo {}%",
            config.color, config.size_px, config.format, config.logo_percent
        );
        Ok(config)
    }

    pub fn font(&self) -> Option<&Path> {
        self.font.as_deref()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// The form's starting values.
    pub fn initial_style(&self) -> QrStyle {
        QrStyle {
            data: String::new(),
            color: self.color,
            size_px: self.size_px,
            format: self.format,
            logo: LogoOptions {
                size_percent: self.logo_percent,
                ..LogoOptions::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_uses_defaults() {
        let config = StudioConfig::from_vars(Vec::<(String, String)>::new())
            .expect("empty config should build");
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.initial_style(), QrStyle::default());
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let config = StudioConfig::from_vars(vec![("HOME", "/root"), ("PATH", "/usr/bin")])
            .expect("config should build");
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn values_are_read() {
        let config = StudioConfig::from_vars(vec![
            ("QRSTUDIO_COLOR", "#4f46e5"),
            ("QRSTUDIO_SIZE", "512"),
            ("QRSTUDIO_FORMAT", "JPG"),
            ("QRSTUDIO_LOGO_PERCENT", "40"),
            ("QRSTUDIO_FONT", "/fonts/ui.ttf"),
            ("QRSTUDIO_OUTPUT_DIR", "/tmp/codes"),
        ])
        .expect("config should build");

        let style = config.initial_style();
        assert_eq!(style.color, QrColor::new(79, 70, 229));
        assert_eq!(style.size_px, 512);
        assert_eq!(style.format, ExportFormat::Jpeg);
        assert_eq!(style.logo.size_percent, 40);
        assert!(!style.logo.enabled);
        assert_eq!(config.font(), Some(Path::new("/fonts/ui.ttf")));
        assert_eq!(config.output_dir(), Some(Path::new("/tmp/codes")));
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        let config = StudioConfig::from_vars(vec![
            ("QRSTUDIO_SIZE", "5000"),
            ("QRSTUDIO_LOGO_PERCENT", "1"),
        ])
        .expect("config should build");
        let style = config.initial_style();
        assert_eq!(style.size_px, MAX_SIZE_PX);
        assert_eq!(style.logo.size_percent, MIN_LOGO_PERCENT);
    }

    #[test]
    fn invalid_color_is_rejected() {
        let result = StudioConfig::from_vars(vec![("QRSTUDIO_COLOR", "purple")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("QRSTUDIO_COLOR"));
    }

    #[test]
    fn invalid_format_is_rejected() {
        let result = StudioConfig::from_vars(vec![("QRSTUDIO_FORMAT", "gif")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("QRSTUDIO_FORMAT"));
    }
}
