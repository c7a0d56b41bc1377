#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrstudio_business::StudioConfig;
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;
use qrstudio_ui::utils::fonts::add_font;

#[global_allocator]
static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // egui_winit reports an error whenever the clipboard holds non-text data.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = StudioConfig::init().unwrap_or_else(|e| {
        log::error!("Invalid configuration, using defaults: {e:#}");
        StudioConfig::default()
    });

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("QR Studio")
        .with_inner_size([650.0, 800.0])
        .with_min_inner_size([520.0, 640.0])
        .with_drag_and_drop(true);
    match eframe::icon_data::from_png_bytes(qrstudio_assets::icon()) {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(e) => log::warn!("Failed to load window icon: {e}"),
    }

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport,
        ..Default::default()
    };

    let font = config.font().and_then(|path| match std::fs::read(path) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Failed to read font {}: {e}", path.display());
            None
        }
    });

    eframe::run_native(
        "QR Studio",
        native_options,
        Box::new(move |cc| {
            if let Some(data) = font {
                add_font(&cc.egui_ctx, data);
            }

            let state = State::new(&config);
            let app = QrStudioApp::builder()
                .state(state)
                .build()
                .restore(cc.storage);
            Ok(Box::new(app))
        }),
    )
}
