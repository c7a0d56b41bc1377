//! Shared utilities for QR Studio.
//!
//! Holds build-time information that both the domain crate and the UI
//! display.

pub mod version_info;
