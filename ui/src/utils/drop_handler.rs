//! Drag-and-drop of logo files onto the window.
//!
//! Dropping a supported image enables the logo overlay with that file, the
//! same as checking "Add logo" and picking it in the dialog.
//!
//! # Architecture
//!
//! - `DropHandler` trait: generic interface for handling dropped files
//! - `SystemDropHandler`: production implementation using egui's input events

use std::path::PathBuf;

use super::file_picker::is_logo_file;

/// Trait for handling dropped files, enabling mock implementations for testing.
pub trait DropHandler {
    /// Returns the path of a dropped logo image, if any was dropped this frame.
    fn dropped_logo(&self, ctx: &egui::Context) -> Option<PathBuf>;
}

/// Default drop handler using system drag-and-drop events.
#[derive(Debug, Default)]
pub struct SystemDropHandler;

impl DropHandler for SystemDropHandler {
    fn dropped_logo(&self, ctx: &egui::Context) -> Option<PathBuf> {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        first_logo(dropped_files.iter().filter_map(|file| file.path.clone()))
    }
}

/// Picks the first supported image among dropped paths.
pub fn first_logo(paths: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    for path in paths {
        if is_logo_file(&path) {
            log::debug!(target: "qrstudio_ui::drop", "dropped_logo path={}", path.display());
            return Some(path);
        }

        log::warn!(
            target: "qrstudio_ui::drop",
            "dropped_file_not_supported path={}",
            path.display()
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_logo_skips_unsupported() {
        let picked = first_logo(vec![
            PathBuf::from("/tmp/notes.txt"),
            PathBuf::from("/tmp/logo.jpg"),
            PathBuf::from("/tmp/other.png"),
        ]);
        assert_eq!(picked, Some(PathBuf::from("/tmp/logo.jpg")));
    }

    #[test]
    fn test_first_logo_none() {
        assert!(first_logo(Vec::new()).is_none());
        assert!(first_logo(vec![PathBuf::from("/tmp/a.gif")]).is_none());
    }

    #[test]
    fn test_system_handler_without_drops() {
        let ctx = egui::Context::default();
        assert!(SystemDropHandler.dropped_logo(&ctx).is_none());
    }
}
