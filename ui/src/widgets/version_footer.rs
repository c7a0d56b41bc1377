use egui::{Response, Ui};
use qrstudio_business::version_info;

use crate::utils::colors::COLOR_MUTED;

/// Build version and commit, shown in the bottom panel.
pub fn version_footer(ui: &mut Ui) -> Response {
    ui.colored_label(COLOR_MUTED, version_info::format_version())
}
