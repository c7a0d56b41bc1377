//! Native file dialogs for choosing a logo and a save location.
//!
//! Dialogs sit behind the [`FileDialogHandler`] trait so tests can inject
//! answers instead of opening system windows.

use std::path::{Path, PathBuf};

use qrstudio_business::ExportFormat;

/// Extensions accepted as logo images.
pub const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Trait for file dialog operations, enabling mock implementations for testing.
pub trait FileDialogHandler {
    /// Asks for a logo image. `None` when the user cancels.
    fn pick_logo(&self) -> Option<PathBuf>;

    /// Asks where to save a code in `format`, proposing `qr_code.<ext>`
    /// inside `directory` when given. `None` when the user cancels.
    fn pick_save_path(&self, format: ExportFormat, directory: Option<&Path>) -> Option<PathBuf>;
}

/// Default handler using the system file dialog.
#[derive(Debug, Default)]
pub struct SystemFileDialog;

impl FileDialogHandler for SystemFileDialog {
    fn pick_logo(&self) -> Option<PathBuf> {
        let path = rfd::FileDialog::new()
            .set_title("Choose logo")
            .add_filter("Images", LOGO_EXTENSIONS)
            .pick_file()?;

        log::info!("User selected logo: {:?}", path);
        Some(path)
    }

    fn pick_save_path(&self, format: ExportFormat, directory: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save QR code")
            .set_file_name(format.default_file_name())
            .add_filter(format!("{} Images", format.label()), &[format.extension()])
            .add_filter("All Files", &["*"]);
        if let Some(directory) = directory {
            dialog = dialog.set_directory(directory);
        }

        let path = dialog.save_file()?;
        log::info!("User chose save path: {:?}", path);
        Some(path)
    }
}

/// Whether `path` looks like a supported logo image.
pub fn is_logo_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            LOGO_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock handler that always cancels.
    struct MockDialogCancel;

    impl FileDialogHandler for MockDialogCancel {
        fn pick_logo(&self) -> Option<PathBuf> {
            None
        }

        fn pick_save_path(&self, _format: ExportFormat, _dir: Option<&Path>) -> Option<PathBuf> {
            None
        }
    }

    /// Mock handler that answers with the proposed file name.
    struct MockDialogDefaultName;

    impl FileDialogHandler for MockDialogDefaultName {
        fn pick_logo(&self) -> Option<PathBuf> {
            Some(PathBuf::from("/tmp/logo.png"))
        }

        fn pick_save_path(&self, format: ExportFormat, dir: Option<&Path>) -> Option<PathBuf> {
            let dir = dir.unwrap_or_else(|| Path::new("/tmp"));
            Some(dir.join(format.default_file_name()))
        }
    }

    #[test]
    fn test_mock_dialog_cancel() {
        let handler = MockDialogCancel;
        assert!(handler.pick_logo().is_none());
        assert!(handler.pick_save_path(ExportFormat::Png, None).is_none());
    }

    #[test]
    fn test_mock_dialog_default_name() {
        let handler = MockDialogDefaultName;
        assert_eq!(
            handler.pick_save_path(ExportFormat::Svg, Some(Path::new("/out"))),
            Some(PathBuf::from("/out/qr_code.svg"))
        );
    }

    #[test]
    fn test_file_dialog_handler_trait_is_object_safe() {
        fn _accept_handler(_handler: &dyn FileDialogHandler) {}
        _accept_handler(&MockDialogCancel);
        _accept_handler(&SystemFileDialog);
    }

    #[test]
    fn test_is_logo_file() {
        assert!(is_logo_file(Path::new("/a/logo.PNG")));
        assert!(is_logo_file(Path::new("logo.jpeg")));
        assert!(is_logo_file(Path::new("logo.bmp")));
        assert!(!is_logo_file(Path::new("logo.gif")));
        assert!(!is_logo_file(Path::new("logo")));
    }
}
