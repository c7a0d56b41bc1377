//! QR generation off the UI thread.
//!
//! Encoding and Lanczos resampling of large outputs can take long enough to
//! drop frames, so `start_generation` runs `qrstudio_business::generate` on a
//! worker thread and the result comes back through a flume channel that the
//! UI polls every frame.

use egui::Context;
use flume::{Receiver, Sender};
use qrstudio_business::{GeneratedQr, QrStudioError, generate};

use crate::state::State;

/// Result type sent from the worker thread back to the UI.
pub type GenerationResult = qrstudio_business::Result<GeneratedQr>;

/// Sender for generation results.
pub type GenerationSender = Sender<GenerationResult>;

/// Receiver for generation results.
pub type GenerationReceiver = Receiver<GenerationResult>;

/// Creates a new channel for generation results.
pub fn create_generation_channel() -> (GenerationSender, GenerationReceiver) {
    flume::unbounded()
}

/// The in-flight generation, if any.
#[derive(Debug)]
pub struct GenerationJob {
    sender: GenerationSender,
    receiver: GenerationReceiver,
    running: bool,
}

impl Default for GenerationJob {
    fn default() -> Self {
        let (sender, receiver) = create_generation_channel();
        Self {
            sender,
            receiver,
            running: false,
        }
    }
}

impl GenerationJob {
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn try_take(&mut self) -> Option<GenerationResult> {
        let result = self.receiver.try_recv().ok()?;
        self.running = false;
        Some(result)
    }
}

/// Starts generating from the current form values.
///
/// Blank input is reported right away without spawning a worker.
pub fn start_generation(state: &mut State, ctx: &Context) {
    if state.generation.is_running() {
        log::debug!("Generation already running, ignoring request");
        return;
    }
    if !state.style.has_data() {
        show_generation_error(state, &QrStudioError::EmptyData);
        return;
    }

    let style = state.style.clone();
    let sender = state.generation.sender.clone();
    let repaint_ctx = ctx.clone();

    let spawned = std::thread::Builder::new()
        .name("qr-generate".to_owned())
        .spawn(move || {
            let result = generate(&style);
            if sender.send(result).is_err() {
                log::warn!("Generation finished after the UI went away");
            }
            repaint_ctx.request_repaint();
        });

    match spawned {
        Ok(_) => state.generation.running = true,
        Err(e) => state.show_error("Generation error", format!("An error occurred: {e}")),
    }
}

/// Applies a finished generation, if one is waiting. Call once per frame.
pub fn poll_generation_result(state: &mut State, ctx: &Context) {
    if let Some(result) = state.generation.try_take() {
        apply_result(state, ctx, result);
    }
}

/// Generates on the calling thread.
pub fn generate_blocking(state: &mut State, ctx: &Context) {
    let result = generate(&state.style);
    apply_result(state, ctx, result);
}

fn apply_result(state: &mut State, ctx: &Context, result: GenerationResult) {
    match result {
        Ok(qr) => {
            let preview = qr.preview();
            if state.preview.set_image(ctx, &preview) {
                state.generated = Some(qr);
            } else {
                state.show_error("Generation error", "Could not display the QR code");
            }
        }
        Err(e) => show_generation_error(state, &e),
    }
}

fn show_generation_error(state: &mut State, error: &QrStudioError) {
    let text = match error {
        QrStudioError::EmptyData => error.to_string(),
        _ => format!("An error occurred: {error}"),
    };
    state.show_error(error.title(), text);
}
