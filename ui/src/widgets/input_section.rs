use egui::{Key, Response, TextEdit, Ui};

use super::section;
use crate::generation::start_generation;
use crate::state::State;

pub const DATA_HINT: &str = "https://example.com or any text";

/// Text or link to encode. Enter starts generation.
pub fn input_section(state: &mut State, ui: &mut Ui) -> Response {
    let mut submit = false;

    let response = section(ui, "Text or link", |ui| {
        ui.horizontal(|ui| {
            let clear_width = 60.0;
            let edit = ui.add(
                TextEdit::singleline(&mut state.style.data)
                    .hint_text(DATA_HINT)
                    .desired_width(ui.available_width() - clear_width),
            );
            if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit = true;
            }

            if ui
                .add_enabled(!state.style.data.is_empty(), egui::Button::new("Clear"))
                .clicked()
            {
                state.style.data.clear();
            }
        });
    })
    .response;

    if submit && state.message.is_none() {
        start_generation(state, ui.ctx());
    }

    response
}
