//! One widget per section of the studio window, top to bottom.

mod action_buttons;
mod appearance;
mod input_section;
mod logo_section;
mod message_dialog;
mod qr_preview;
mod version_footer;

pub use action_buttons::action_buttons;
pub use appearance::appearance_section;
pub use input_section::input_section;
pub use logo_section::logo_section;
pub use message_dialog::message_dialog;
pub use qr_preview::{PREVIEW_FRAME_SIZE, qr_preview};
pub use version_footer::version_footer;

use egui::{InnerResponse, RichText, Ui};

use crate::actions::apply_dropped_logo;
use crate::generation::poll_generation_result;
use crate::state::State;

/// Draws the whole studio form and its dialog.
///
/// Also collects a finished background generation and any dropped logo,
/// so it must run every frame.
pub fn studio_ui(state: &mut State, ui: &mut Ui) {
    let ctx = ui.ctx().clone();
    poll_generation_result(state, &ctx);
    apply_dropped_logo(state, &ctx);

    ui.vertical_centered(|ui| {
        ui.heading("QR Studio");
    });
    ui.add_space(8.0);

    input_section(state, ui);
    appearance_section(state, ui);
    logo_section(state, ui);
    ui.add_space(8.0);
    qr_preview(state, ui);
    ui.add_space(8.0);
    action_buttons(state, ui);

    message_dialog(state, ui);
}

/// A titled group box.
fn section<R>(
    ui: &mut Ui,
    title: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    egui::Frame::group(ui.style())
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong());
            ui.add_space(4.0);
            add_contents(ui)
        })
}
