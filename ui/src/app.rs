use qrstudio_business::QrStyle;

use crate::{state::State, widgets};

/// Storage key of the last-used appearance.
pub const STYLE_KEY: &str = "qrstudio.style";

/// The QR Studio window.
#[derive(bon::Builder)]
pub struct QrStudioApp {
    #[builder(default)]
    pub state: State,
}

impl QrStudioApp {
    /// Applies the appearance saved by a previous session, if any.
    pub fn restore(mut self, storage: Option<&dyn eframe::Storage>) -> Self {
        if let Some(style) = storage.and_then(|s| eframe::get_value::<QrStyle>(s, STYLE_KEY)) {
            self.state.restore_style(style);
        }
        self
    }
}

impl eframe::App for QrStudioApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("version_footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                widgets::version_footer(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    widgets::studio_ui(&mut self.state, ui);
                });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STYLE_KEY, &self.state.style.persisted());
    }
}
