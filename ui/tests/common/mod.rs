use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use egui_kittest::Harness;
use qrstudio_business::ExportFormat;
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;
use qrstudio_ui::utils::file_picker::FileDialogHandler;

/// Window size matching the app's default viewport, tall enough to show
/// every section without scrolling.
pub const WINDOW_SIZE: [f32; 2] = [650.0, 900.0];

/// Frames to run after an interaction so the UI settles.
pub const UI_PROPAGATION_FRAMES: usize = 5;

/// File dialog answering with preset paths and recording save requests.
#[derive(Clone, Default)]
pub struct MockDialog {
    pub logo: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub save_requests: Arc<Mutex<Vec<(ExportFormat, Option<PathBuf>)>>>,
}

impl MockDialog {
    #[allow(unused)]
    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        Self {
            save: Some(path.into()),
            ..Self::default()
        }
    }

    #[allow(unused)]
    pub fn requests(&self) -> Vec<(ExportFormat, Option<PathBuf>)> {
        self.save_requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl FileDialogHandler for MockDialog {
    fn pick_logo(&self) -> Option<PathBuf> {
        self.logo.clone()
    }

    fn pick_save_path(&self, format: ExportFormat, directory: Option<&Path>) -> Option<PathBuf> {
        if let Ok(mut requests) = self.save_requests.lock() {
            requests.push((format, directory.map(Path::to_path_buf)));
        }
        self.save.clone()
    }
}

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    /// Runs frames until `done` holds, giving background work time to finish.
    #[allow(unused)]
    pub fn step_until(&mut self, mut done: impl FnMut(&T) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !done(self.harness.state()) {
            assert!(Instant::now() < deadline, "condition not reached in time");
            self.harness.step();
            std::thread::sleep(Duration::from_millis(10));
        }
        for _ in 0..UI_PROPAGATION_FRAMES {
            self.harness.step();
        }
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub fn new(dialog: MockDialog, app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let harness = Harness::builder()
            .with_size(WINDOW_SIZE)
            .build_ui_state(app, State::test(dialog));
        Self { harness }
    }
}

impl<'a> TestCtx<'a, QrStudioApp> {
    #[allow(unused)]
    pub fn new_app(dialog: MockDialog) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = QrStudioApp::builder().state(State::test(dialog)).build();
        let harness = Harness::builder()
            .with_size(WINDOW_SIZE)
            .build_eframe(|_| app);
        Self { harness }
    }
}
