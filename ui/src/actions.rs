//! User actions that go beyond editing a single field.

use std::path::PathBuf;

use egui::Context;
use qrstudio_business::export;

use crate::state::State;

/// Checks or unchecks "Add logo". Unchecking forgets the chosen file.
pub fn toggle_logo(state: &mut State, enabled: bool) {
    state.style.logo.set_enabled(enabled);
}

/// Opens the logo picker. A cancelled dialog leaves the previous choice.
pub fn choose_logo(state: &mut State) {
    if !state.style.logo.enabled {
        return;
    }
    if let Some(path) = state.file_dialog.pick_logo() {
        set_logo_path(state, path);
    }
}

/// Uses a logo dropped onto the window, enabling the overlay.
pub fn apply_dropped_logo(state: &mut State, ctx: &Context) {
    if let Some(path) = state.drop_handler.dropped_logo(ctx) {
        state.style.logo.enabled = true;
        set_logo_path(state, path);
    }
}

fn set_logo_path(state: &mut State, path: PathBuf) {
    log::info!("Logo set to {}", path.display());
    state.style.logo.path = Some(path);
}

/// Asks for a destination and writes the last generated code there.
///
/// Does nothing before a successful generation or when the dialog is
/// cancelled.
pub fn save_generated(state: &mut State) {
    let Some(qr) = state.generated.as_ref() else {
        log::debug!("Nothing generated yet, ignoring save");
        return;
    };

    let format = state.style.format;
    let Some(path) = state
        .file_dialog
        .pick_save_path(format, state.output_dir.as_deref())
    else {
        log::debug!("Save cancelled");
        return;
    };

    match export::save(qr, &path, format) {
        Ok(saved) => state.show_success(
            "Success",
            format!("QR code saved as:\n{}", saved.display()),
        ),
        Err(e) => state.show_error("Save error", format!("Could not save the file: {e}")),
    }
}
