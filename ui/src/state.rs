use std::path::PathBuf;

use egui::{Context, TextureHandle, TextureOptions};
use image::RgbImage;
use qrstudio_business::{GeneratedQr, LogoOptions, QrStyle, StudioConfig};

use crate::generation::GenerationJob;
use crate::utils::colors::{COLOR_GREEN, COLOR_RED};
use crate::utils::drop_handler::{DropHandler, SystemDropHandler};
use crate::utils::file_picker::{FileDialogHandler, SystemFileDialog};
use crate::utils::image_data::ImageData;

/// Kind of message shown in the modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    pub fn color(self) -> egui::Color32 {
        match self {
            Self::Error => COLOR_RED,
            Self::Success => COLOR_GREEN,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Error => "✖",
            Self::Success => "✔",
        }
    }
}

/// A pending modal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

/// Texture of the current preview.
#[derive(Default)]
pub struct QrPreviewState {
    texture: Option<TextureHandle>,
}

impl std::fmt::Debug for QrPreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrPreviewState")
            .field("size", &self.texture.as_ref().map(TextureHandle::size))
            .finish()
    }
}

impl QrPreviewState {
    /// Uploads `image` as the preview, replacing any previous one.
    ///
    /// Returns false if the image could not be converted.
    pub fn set_image(&mut self, ctx: &Context, image: &RgbImage) -> bool {
        let Some(color_image) = ImageData::from(image).to_color_image() else {
            log::warn!(
                "Invalid preview data: {}x{}",
                image.width(),
                image.height()
            );
            return false;
        };

        match &mut self.texture {
            Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture("qr_preview", color_image, TextureOptions::LINEAR));
            }
        }
        true
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.texture.is_some()
    }
}

/// The main application state.
///
/// Note: We manually implement Default because the dialog handlers are
/// trait objects.
pub struct State {
    /// Everything the form collects.
    pub style: QrStyle,
    /// The last successfully generated code; `Some` enables saving.
    pub generated: Option<GeneratedQr>,
    /// Preview texture of `generated`.
    pub preview: QrPreviewState,
    /// Pending error or success dialog.
    pub message: Option<MessageDialog>,
    /// Background generation in flight.
    pub generation: GenerationJob,
    /// Directory proposed by the save dialog.
    pub output_dir: Option<PathBuf>,
    /// File dialogs, replaceable in tests.
    pub file_dialog: Box<dyn FileDialogHandler>,
    /// Drag-and-drop source, replaceable in tests.
    pub drop_handler: Box<dyn DropHandler>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&StudioConfig::default())
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("style", &self.style)
            .field("generated", &self.generated.is_some())
            .field("preview", &self.preview)
            .field("message", &self.message)
            .field("generation", &self.generation)
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

impl State {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            style: config.initial_style(),
            generated: None,
            preview: QrPreviewState::default(),
            message: None,
            generation: GenerationJob::default(),
            output_dir: config.output_dir().map(PathBuf::from),
            file_dialog: Box::new(SystemFileDialog),
            drop_handler: Box::new(SystemDropHandler),
        }
    }

    /// State for tests with injected dialogs.
    pub fn test(file_dialog: impl FileDialogHandler + 'static) -> Self {
        Self {
            file_dialog: Box::new(file_dialog),
            ..Self::default()
        }
    }

    /// Applies a style remembered from a previous session.
    pub fn restore_style(&mut self, persisted: QrStyle) {
        log::debug!("Restoring persisted style: {persisted:?}");
        let persisted = persisted.clamp();
        self.style = QrStyle {
            data: String::new(),
            logo: LogoOptions {
                size_percent: persisted.logo.size_percent,
                ..LogoOptions::default()
            },
            ..persisted
        };
    }

    pub fn has_generated(&self) -> bool {
        self.generated.is_some()
    }

    pub fn show_error(&mut self, title: impl Into<String>, text: impl Into<String>) {
        let (title, text) = (title.into(), text.into());
        log::warn!("{title}: {text}");
        self.message = Some(MessageDialog {
            kind: MessageKind::Error,
            title,
            text,
        });
    }

    pub fn show_success(&mut self, title: impl Into<String>, text: impl Into<String>) {
        let (title, text) = (title.into(), text.into());
        log::info!("{title}: {text}");
        self.message = Some(MessageDialog {
            kind: MessageKind::Success,
            title,
            text,
        });
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }
}
