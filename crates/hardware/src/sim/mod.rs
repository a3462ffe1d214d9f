//! Run setup and driving.
//!
//! Provides utilities for initialising data memory from an image file and for
//! driving it cycle by cycle from an access script.

/// Memory image parsing and loading.
pub mod loader;

/// Access script parsing and execution.
pub mod script;

/// Cuts a line at the first `//` or `#` comment marker.
fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}
