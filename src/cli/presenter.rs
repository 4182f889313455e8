//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
pub struct Presenter {
    progress: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Start a progress bar of `len` steps with message
    pub fn start_progress(&mut self, len: u64, message: &str) {
        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:20.cyan}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█░ "),
        );
        bar.set_message(message.to_string());
        self.progress = Some(bar);
    }

    /// Advance the progress bar by one step
    pub fn advance_progress(&self) {
        if let Some(ref bar) = self.progress {
            bar.inc(1);
        }
    }

    /// Mark progress as success and finish
    pub fn progress_success(&mut self, message: &str) {
        if let Some(bar) = self.progress.take() {
            bar.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark progress as failed and finish
    pub fn progress_fail(&mut self, message: &str) {
        if let Some(bar) = self.progress.take() {
            bar.abandon_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (command results)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
