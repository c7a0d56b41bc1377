#![warn(clippy::all, rust_2018_idioms)]

pub mod actions;
pub mod app;
pub mod generation;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::QrStudioApp;
