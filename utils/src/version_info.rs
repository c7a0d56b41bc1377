//! Version information, populated at build time.
//!
//! Display format: `v{version} ({commit}, {date})` where the date is the
//! `YYYY-MM-DD` prefix of the RFC3339 build timestamp.

/// Build timestamp in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a git checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Package version.
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the date portion of [`build_date`].
pub fn build_day() -> &'static str {
    let date = build_date();
    // RFC3339 is ASCII, so slicing on a byte index is safe when the check holds
    if date.len() >= 10 && date.is_ascii() {
        &date[..10]
    } else {
        date
    }
}

/// Format the version info as a display string.
pub fn format_version() -> String {
    format!("v{} ({}, {})", build_version(), build_commit(), build_day())
}
