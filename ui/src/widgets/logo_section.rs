use egui::{Button, Response, RichText, Slider, Ui};
use qrstudio_business::style::{MAX_LOGO_PERCENT, MIN_LOGO_PERCENT};

use super::section;
use crate::actions::{choose_logo, toggle_logo};
use crate::state::State;
use crate::utils::colors::COLOR_MUTED;

pub const NO_FILE_LABEL: &str = "No file selected";

/// Optional circular logo in the middle of the code.
pub fn logo_section(state: &mut State, ui: &mut Ui) -> Response {
    section(ui, "Logo", |ui| {
        let mut enabled = state.style.logo.enabled;
        if ui.checkbox(&mut enabled, "Add logo").changed() {
            toggle_logo(state, enabled);
        }

        ui.horizontal(|ui| {
            ui.label("Logo size:");
            ui.add(
                Slider::new(
                    &mut state.style.logo.size_percent,
                    MIN_LOGO_PERCENT..=MAX_LOGO_PERCENT,
                )
                .suffix("%"),
            );
        });

        ui.horizontal(|ui| {
            if ui
                .add_enabled(enabled, Button::new("Choose image"))
                .clicked()
            {
                choose_logo(state);
            }

            let name = state
                .style
                .logo
                .file_name()
                .unwrap_or_else(|| NO_FILE_LABEL.to_owned());
            ui.label(RichText::new(name).color(COLOR_MUTED));
        });
    })
    .response
}
