// file: src/pipeline/progress.rs
// description: progress bar and counters for sentence classification
// reference: uses indicatif for progress bars and tracks classification metrics

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationCounts {
    pub classified: usize,
    pub failed: usize,
}

impl ClassificationCounts {
    pub fn total(&self) -> usize {
        self.classified + self.failed
    }

    pub fn failure_rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.failed as f64 / self.total() as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    classified: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
}

impl ProgressTracker {
    pub fn new(total_sentences: usize) -> Self {
        Self::with_color(total_sentences, true)
    }

    /// Counts without drawing anything.
    pub fn hidden(total_sentences: usize) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        Self::build(&multi_progress, total_sentences, false)
    }

    pub fn with_color(total_sentences: usize, colored: bool) -> Self {
        Self::build(&MultiProgress::new(), total_sentences, colored)
    }

    fn build(multi_progress: &MultiProgress, total: usize, colored: bool) -> Self {
        Self {
            main_bar: create_progress_bar(multi_progress, total as u64, colored),
            detail_bar: create_detail_bar(multi_progress),
            classified: Arc::new(AtomicUsize::new(0)),
            failed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn inc_classified(&self) {
        self.classified.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Classification complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn counts(&self) -> ClassificationCounts {
        ClassificationCounts {
            classified: self.classified.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
        }
    }

    fn update_detail_bar(&self) {
        let counts = self.counts();
        self.detail_bar.set_message(format!(
            "Classified: {} | Failed: {}",
            counts.classified, counts.failed
        ));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn bar_style(colored: bool) -> ProgressStyle {
    let (template, chars) = if colored {
        (
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sentences {msg}",
            "█▓▒░",
        )
    } else {
        (
            "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} sentences {msg}",
            "=>-",
        )
    };

    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(chars)
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    bar.set_style(bar_style(colored));
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
