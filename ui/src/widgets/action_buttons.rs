use egui::{Button, Response, RichText, Ui, vec2};

use crate::actions::save_generated;
use crate::generation::start_generation;
use crate::state::State;
use crate::utils::colors::COLOR_ACCENT;

pub const GENERATE_LABEL: &str = "Generate QR code";
pub const GENERATING_LABEL: &str = "Generating...";
pub const SAVE_LABEL: &str = "Save QR code";

/// Generate and save buttons. Save stays disabled until a code exists.
pub fn action_buttons(state: &mut State, ui: &mut Ui) -> Response {
    let button_size = vec2(180.0, 32.0);

    ui.horizontal(|ui| {
        let total = button_size.x * 2.0 + ui.spacing().item_spacing.x;
        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

        if state.generation.is_running() {
            ui.add_enabled(false, Button::new(GENERATING_LABEL).min_size(button_size));
            ui.spinner();
        } else {
            let generate = Button::new(RichText::new(GENERATE_LABEL).strong())
                .fill(COLOR_ACCENT)
                .min_size(button_size);
            if ui.add(generate).clicked() {
                start_generation(state, ui.ctx());
            }
        }

        let save = Button::new(SAVE_LABEL).min_size(button_size);
        if ui.add_enabled(state.has_generated(), save).clicked() {
            save_generated(state);
        }
    })
    .response
}
