use egui::{ComboBox, DragValue, Response, RichText, Ui};
use qrstudio_business::style::{MAX_SIZE_PX, MIN_SIZE_PX};
use qrstudio_business::{ExportFormat, QrColor};

use super::section;
use crate::state::State;
use crate::utils::colors::COLOR_MUTED;

/// Color, output size and export format.
pub fn appearance_section(state: &mut State, ui: &mut Ui) -> Response {
    section(ui, "Appearance", |ui| {
        egui::Grid::new("appearance_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Color:");
                ui.horizontal(|ui| {
                    let mut rgb = state.style.color.rgb();
                    if ui.color_edit_button_srgb(&mut rgb).changed() {
                        state.style.color = QrColor::from(rgb);
                    }
                    ui.label(
                        RichText::new(state.style.color.to_hex())
                            .monospace()
                            .color(COLOR_MUTED),
                    );
                });
                ui.end_row();

                ui.label("Size:");
                ui.add(
                    DragValue::new(&mut state.style.size_px)
                        .range(MIN_SIZE_PX..=MAX_SIZE_PX)
                        .speed(5)
                        .suffix(" px"),
                );
                ui.end_row();

                ui.label("Format:");
                ComboBox::from_id_salt("export_format")
                    .selected_text(state.style.format.label())
                    .show_ui(ui, |ui| {
                        for format in ExportFormat::ALL {
                            ui.selectable_value(&mut state.style.format, format, format.label());
                        }
                    });
                ui.end_row();
            });
    })
    .response
}

#[cfg(test)]
mod appearance_tests {
    use kittest::Queryable;
    use qrstudio_business::QrColor;

    use crate::test_utils::state_harness;

    #[test]
    fn test_shows_color_hex() {
        let mut harness = state_harness(|ui, state| {
            super::appearance_section(state, ui);
        });
        harness.run();
        assert!(harness.query_by_label("#000000").is_some());

        harness.state_mut().style.color = QrColor::new(0x4f, 0x46, 0xe5);
        harness.run();
        assert!(harness.query_by_label("#4f46e5").is_some());
    }
}
