//! Batch progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Creatures: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar for a batch run; a hidden bar when progress is suppressed
///
/// Cheap to clone and safe to advance from worker threads.
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar counting up to `total` avatars
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    /// Record one finished avatar
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Number of avatars recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a summary message
    pub fn finish(&self, written: usize, skipped: usize) {
        self.bar
            .finish_with_message(format!("{written} written, {skipped} skipped"));
    }
}
