use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating or exporting a QR code.
#[derive(Debug, Error)]
pub enum QrStudioError {
    #[error("Please enter text or a link for the QR code")]
    EmptyData,
    #[error("Could not encode the data: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Failed to add logo {path:?}: {source}")]
    Logo {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Could not save the file {path:?}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl QrStudioError {
    pub fn logo(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Logo {
            path: path.into(),
            source,
        }
    }

    pub fn save(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Save {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Title used when the error is shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyData | Self::InvalidColor(_) => "Error",
            Self::Encode(_) | Self::Logo { .. } => "Generation error",
            Self::Save { .. } | Self::Io { .. } => "Save error",
        }
    }
}

pub type Result<T, E = QrStudioError> = std::result::Result<T, E>;
