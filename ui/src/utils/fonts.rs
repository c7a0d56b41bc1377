use egui::{
    FontData, FontFamily,
    epaint::text::{FontInsert, FontPriority, InsertFontFamily},
};

/// Registers a user-supplied font as the preferred proportional font.
pub fn add_font(ctx: &egui::Context, font_data: Vec<u8>) {
    let data = FontData::from_owned(font_data);
    ctx.add_font(FontInsert::new(
        "qrstudio user font",
        data,
        vec![InsertFontFamily {
            family: FontFamily::Proportional,
            priority: FontPriority::Highest,
        }],
    ));
}
