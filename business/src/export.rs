//! The save operation.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{QrStudioError, Result};
use crate::render::GeneratedQr;
use crate::style::ExportFormat;

/// Picks the file to write and its format.
///
/// A recognised extension on `path` wins over the selected `format`;
/// otherwise the selected format's extension is appended.
pub fn resolve_target(path: &Path, format: ExportFormat) -> (PathBuf, ExportFormat) {
    match ExportFormat::from_path(path) {
        Some(from_path) => (path.to_path_buf(), from_path),
        None => {
            let mut name = path.as_os_str().to_owned();
            name.push(".");
            name.push(format.extension());
            (PathBuf::from(name), format)
        }
    }
}

/// Encodes `qr` in `format` without touching the file system.
pub fn encode_to_bytes(qr: &GeneratedQr, format: ExportFormat) -> Result<Vec<u8>> {
    match format.image_format() {
        Some(image_format) => {
            let mut bytes = Vec::new();
            qr.image()
                .write_to(&mut Cursor::new(&mut bytes), image_format)
                .map_err(|e| QrStudioError::save(format.default_file_name(), e))?;
            Ok(bytes)
        }
        None => qr.svg().map(String::into_bytes),
    }
}

/// Writes `qr` to `path` and returns the path actually written.
///
/// See [`resolve_target`] for how the format is chosen. Missing parent
/// directories are created.
pub fn save(qr: &GeneratedQr, path: &Path, format: ExportFormat) -> Result<PathBuf> {
    let (path, format) = resolve_target(path, format);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| QrStudioError::io(parent, e))?;
    }

    match format.image_format() {
        Some(image_format) => qr
            .image()
            .save_with_format(&path, image_format)
            .map_err(|e| QrStudioError::save(&path, e))?,
        None => {
            let svg = qr.svg()?;
            fs::write(&path, svg).map_err(|e| QrStudioError::io(&path, e))?;
        }
    }

    log::info!("Saved {} QR code to {}", format.label(), path.display());
    Ok(path)
}
