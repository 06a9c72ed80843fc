use indicatif::{ProgressBar, ProgressStyle};

/// 已完成項目的百分比（無條件捨去，上限 100）
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (completed.saturating_mul(100) / total).min(100)
}

pub fn create_progress_bar(total: usize, message: impl Into<String>) -> ProgressBar {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    progress_bar.set_message(message.into());
    progress_bar
}
