//! Progress indicators for CLI mode
//!
//! The bar draws to stderr and stays hidden when stderr is not a terminal,
//! so piped output is never interleaved with progress updates.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar counting scanned hosts
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓░"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Create a progress bar that never draws, used when output is quiet
pub fn hidden_progress_bar() -> ProgressBar {
    ProgressBar::hidden()
}
