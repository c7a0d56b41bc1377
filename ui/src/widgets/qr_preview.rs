use egui::load::SizedTexture;
use egui::{Image, Response, RichText, Stroke, Ui, vec2};
use qrstudio_business::PREVIEW_SIZE_PX;

use crate::state::State;
use crate::utils::colors::{COLOR_BORDER, COLOR_MUTED};

/// Side of the framed preview area.
pub const PREVIEW_FRAME_SIZE: f32 = 320.0;

pub const PLACEHOLDER: &str = "QR code will appear here";

/// Framed preview of the last generated code, or a placeholder.
pub fn qr_preview(state: &State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .stroke(Stroke::new(1.0, COLOR_BORDER))
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.set_min_size(vec2(PREVIEW_FRAME_SIZE, PREVIEW_FRAME_SIZE));
                ui.set_max_size(vec2(PREVIEW_FRAME_SIZE, PREVIEW_FRAME_SIZE));
                ui.centered_and_justified(|ui| match state.preview.texture() {
                    Some(texture) => {
                        let side = PREVIEW_SIZE_PX as f32;
                        ui.add(
                            Image::from_texture(SizedTexture::from_handle(texture))
                                .fit_to_exact_size(vec2(side, side))
                                .alt_text("QR code preview"),
                        );
                    }
                    None => {
                        ui.label(RichText::new(PLACEHOLDER).color(COLOR_MUTED));
                    }
                });
            });
    })
    .response
}
