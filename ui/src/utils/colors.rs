//! Shared color constants for the UI.

use egui::Color32;

/// Indigo accent used for primary buttons and the selected color swatch border.
pub const COLOR_ACCENT: Color32 = Color32::from_rgb(79, 70, 229);

/// Forest green color for success messages.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error messages.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Gray for placeholders and secondary text.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(107, 114, 128);

/// Light gray border of the preview frame.
pub const COLOR_BORDER: Color32 = Color32::from_rgb(209, 213, 219);
