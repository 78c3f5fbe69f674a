//! Progress display for batch texture generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Textures: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many textures of a batch have been written
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    total: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            total: 0,
        }
    }

    /// Start a bar for `texture_count` textures
    pub fn initialize(&mut self, texture_count: usize) {
        let bar = ProgressBar::new(texture_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
        self.total = texture_count;
    }

    /// Show which output is being generated
    pub fn start_texture(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.to_string());
        }
    }

    /// Count a finished texture
    pub fn complete_texture(&mut self, elapsed: Duration) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
        log::debug!(
            "texture {}/{} done in {:.1?}",
            self.completed,
            self.total,
            elapsed
        );
    }

    /// Number of textures counted as complete
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Whether a bar is shown and still accepting updates
    pub fn is_active(&self) -> bool {
        self.bar.as_ref().is_some_and(|bar| !bar.is_finished())
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All textures written");
        }
    }

    /// Stop the bar where it is after a failed batch
    pub fn abandon(&self) {
        if let Some(ref bar) = self.bar {
            bar.abandon_with_message(format!(
                "Stopped after {}/{} textures",
                self.completed, self.total
            ));
        }
    }
}
