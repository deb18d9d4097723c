//! Console spinner shown while a command is running

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting that a search is in progress
///
/// A hidden spinner is used when progress output is suppressed, so callers
/// never need to branch on visibility.
pub struct SearchSpinner {
    bar: ProgressBar,
    started: Instant,
}

impl SearchSpinner {
    /// Start a visible spinner labelled `message`
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self {
            bar,
            started: Instant::now(),
        }
    }

    /// Create a spinner that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            started: Instant::now(),
        }
    }

    /// Start a spinner, or a hidden one when `quiet` is set
    pub fn for_command(message: &str, quiet: bool) -> Self {
        if quiet {
            Self::hidden()
        } else {
            Self::start(message)
        }
    }

    /// Replace the label
    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Whether the spinner draws nothing
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Stop the spinner, clear it and report how long it ran
    pub fn finish(self) -> Duration {
        self.bar.finish_and_clear();
        self.started.elapsed()
    }
}
