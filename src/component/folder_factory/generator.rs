//! 批次建立資料夾
//!
//! 依編號 1..=count 順序逐一建立資料夾，不平行處理、不回滾

use super::error::BatchError;
use super::request::BatchRequest;
use crate::config::FailurePolicy;
use log::{debug, info, warn};
use std::fs;
use std::iter::FusedIterator;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// 成功建立的資料夾
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFolder {
    pub index: usize,
    pub path: PathBuf,
}

/// 進度通知：已建立第 `index` 個，共 `total` 個
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub index: usize,
    pub total: usize,
}

impl BatchProgress {
    #[must_use]
    pub fn percent(&self) -> usize {
        crate::tools::progress_percent(self.index, self.total)
    }
}

/// 批次結束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// 所有編號都已嘗試
    Completed,
    /// 遇到建立錯誤而停止
    Halted,
    /// 收到中斷訊號而停止
    Cancelled,
}

/// 批次執行結果統計
#[derive(Debug)]
pub struct BatchReport {
    pub total: usize,
    pub created: Vec<PathBuf>,
    pub failures: Vec<BatchError>,
    pub outcome: BatchOutcome,
}

impl BatchReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == BatchOutcome::Completed && self.failures.is_empty()
    }

    /// 尚未嘗試的編號數量
    #[must_use]
    pub fn not_attempted(&self) -> usize {
        self.total - self.created.len() - self.failures.len()
    }
}

/// 惰性的資料夾建立序列，每次 `next` 建立一個資料夾
///
/// 在 [`FailurePolicy::Halt`] 下，第一個錯誤之後序列即結束。
pub struct BatchGenerator<'a> {
    request: &'a BatchRequest,
    policy: FailurePolicy,
    width: usize,
    next_index: usize,
    halted: bool,
}

/// 驗證請求後回傳建立序列；驗證失敗時不會有任何檔案系統變更
pub fn generate(
    request: &BatchRequest,
    policy: FailurePolicy,
) -> Result<BatchGenerator<'_>, BatchError> {
    request.validate()?;

    Ok(BatchGenerator {
        request,
        policy,
        width: request.width(),
        next_index: 1,
        halted: false,
    })
}

impl BatchGenerator<'_> {
    pub const fn width(&self) -> usize {
        self.width
    }

    fn remaining(&self) -> usize {
        if self.halted {
            0
        } else {
            self.request.count().saturating_sub(self.next_index - 1)
        }
    }
}

impl Iterator for BatchGenerator<'_> {
    type Item = Result<CreatedFolder, BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;
        let path = self.request.folder_path(index);

        // create_dir 不會覆寫既有的檔案或資料夾
        match fs::create_dir(&path) {
            Ok(()) => {
                debug!("已建立資料夾 #{index}: {}", path.display());
                Some(Ok(CreatedFolder { index, path }))
            }
            Err(cause) => {
                if self.policy == FailurePolicy::Halt {
                    self.halted = true;
                }
                Some(Err(BatchError::Creation { index, path, cause }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        let lower = match self.policy {
            FailurePolicy::Halt => remaining.min(1),
            FailurePolicy::Continue => remaining,
        };
        (lower, Some(remaining))
    }
}

impl FusedIterator for BatchGenerator<'_> {}

/// 執行整批建立並彙整結果
///
/// 每次成功建立後呼叫 `on_progress`；每個編號之間檢查 `shutdown_signal`。
pub fn run_batch<F>(
    request: &BatchRequest,
    policy: FailurePolicy,
    shutdown_signal: &AtomicBool,
    mut on_progress: F,
) -> Result<BatchReport, BatchError>
where
    F: FnMut(BatchProgress),
{
    let total = request.count();
    let mut generator = generate(request, policy)?;

    info!(
        "開始建立 {total} 個資料夾於 {} (補零寬度 {}, 失敗策略 {policy})",
        request.base_directory().display(),
        generator.width()
    );

    let mut report = BatchReport {
        total,
        created: Vec::with_capacity(total.min(1024)),
        failures: Vec::new(),
        outcome: BatchOutcome::Completed,
    };

    loop {
        if shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止建立資料夾");
            report.outcome = BatchOutcome::Cancelled;
            break;
        }

        let Some(item) = generator.next() else {
            break;
        };

        match item {
            Ok(folder) => {
                report.created.push(folder.path);
                on_progress(BatchProgress {
                    index: folder.index,
                    total,
                });
            }
            Err(error) => {
                warn!("{error}");
                report.failures.push(error);
                if policy == FailurePolicy::Halt {
                    report.outcome = BatchOutcome::Halted;
                    break;
                }
            }
        }
    }

    info!(
        "批次結束 - 建立: {}, 失敗: {}, 狀態: {:?}",
        report.created.len(),
        report.failures.len(),
        report.outcome
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn not_cancelled() -> AtomicBool {
        AtomicBool::new(false)
    }

    #[test]
    fn test_generate_creates_all_folders_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let request = BatchRequest::new(temp_dir.path(), "img_", "", 12).unwrap();

        let created: Vec<CreatedFolder> = generate(&request, FailurePolicy::Halt)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(created.len(), 12);
        assert_eq!(created[0].index, 1);
        assert_eq!(created[0].path, temp_dir.path().join("img_01"));
        assert_eq!(created[11].path, temp_dir.path().join("img_12"));
        assert!(created.iter().all(|f| f.path.is_dir()));
    }

    #[test]
    fn test_generate_is_lazy() {
        let temp_dir = TempDir::new().unwrap();
        let request = BatchRequest::new(temp_dir.path(), "", "", 5).unwrap();

        let mut generator = generate(&request, FailurePolicy::Halt).unwrap();
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);

        generator.next().unwrap().unwrap();
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
        assert!(temp_dir.path().join("1").is_dir());
    }

    #[test]
    fn test_halt_stops_after_first_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("img_01")).unwrap();
        let request = BatchRequest::new(temp_dir.path(), "img_", "", 12).unwrap();

        let items: Vec<_> = generate(&request, FailurePolicy::Halt).unwrap().collect();

        assert_eq!(items.len(), 1);
        assert!(matches!(
            items[0],
            Err(BatchError::Creation { index: 1, .. })
        ));
        assert!(!temp_dir.path().join("img_02").exists());
    }

    #[test]
    fn test_continue_skips_failed_index() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("d2"), "occupied").unwrap();
        let request = BatchRequest::new(temp_dir.path(), "d", "", 3).unwrap();

        let items: Vec<_> = generate(&request, FailurePolicy::Continue)
            .unwrap()
            .collect();

        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(BatchError::Creation { index: 2, .. })));
        assert!(items[2].is_ok());
        assert!(temp_dir.path().join("d3").is_dir());
    }

    #[test]
    fn test_generate_revalidates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("base");
        fs::create_dir(&base).unwrap();
        let request = BatchRequest::new(&base, "", "", 2).unwrap();
        fs::remove_dir(&base).unwrap();

        assert!(matches!(
            generate(&request, FailurePolicy::Halt),
            Err(BatchError::InvalidBaseDirectory { .. })
        ));
    }

    #[test]
    fn test_size_hint() {
        let temp_dir = TempDir::new().unwrap();
        let request = BatchRequest::new(temp_dir.path(), "", "", 4).unwrap();

        let generator = generate(&request, FailurePolicy::Continue).unwrap();
        assert_eq!(generator.size_hint(), (4, Some(4)));

        let generator = generate(&request, FailurePolicy::Halt).unwrap();
        assert_eq!(generator.size_hint(), (1, Some(4)));
    }

    #[test]
    fn test_run_batch_reports_progress() {
        let temp_dir = TempDir::new().unwrap();
        let request = BatchRequest::new(temp_dir.path(), "p", "s", 4).unwrap();
        let mut events = Vec::new();

        let report = run_batch(&request, FailurePolicy::Halt, &not_cancelled(), |p| {
            events.push(p);
        })
        .unwrap();

        assert!(report.is_success());
        assert_eq!(report.created.len(), 4);
        assert_eq!(report.not_attempted(), 0);
        let percents: Vec<usize> = events.iter().map(BatchProgress::percent).collect();
        assert_eq!(percents, vec![25, 50, 75, 100]);
        assert_eq!(events.last().unwrap().index, 4);
    }

    #[test]
    fn test_run_batch_halts() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("f3")).unwrap();
        let request = BatchRequest::new(temp_dir.path(), "f", "", 5).unwrap();

        let report = run_batch(&request, FailurePolicy::Halt, &not_cancelled(), |_| {}).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Halted);
        assert_eq!(report.created.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index(), Some(3));
        assert_eq!(report.not_attempted(), 2);
        assert!(temp_dir.path().join("f1").is_dir());
        assert!(!temp_dir.path().join("f4").exists());
    }

    #[test]
    fn test_run_batch_continue_collects_failures() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("f3")).unwrap();
        let request = BatchRequest::new(temp_dir.path(), "f", "", 5).unwrap();

        let report =
            run_batch(&request, FailurePolicy::Continue, &not_cancelled(), |_| {}).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Completed);
        assert!(!report.is_success());
        assert_eq!(report.created.len(), 4);
        assert_eq!(report.failures.len(), 1);
        assert!(temp_dir.path().join("f5").is_dir());
    }

    #[test]
    fn test_run_batch_cancelled_before_start() {
        let temp_dir = TempDir::new().unwrap();
        let request = BatchRequest::new(temp_dir.path(), "", "", 3).unwrap();
        let cancelled = AtomicBool::new(true);

        let report = run_batch(&request, FailurePolicy::Halt, &cancelled, |_| {}).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Cancelled);
        assert!(report.created.is_empty());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_batch_cancelled_midway() {
        let temp_dir = TempDir::new().unwrap();
        let request = BatchRequest::new(temp_dir.path(), "", "", 10).unwrap();
        let signal = AtomicBool::new(false);

        let report = run_batch(&request, FailurePolicy::Halt, &signal, |p| {
            if p.index == 3 {
                signal.store(true, Ordering::SeqCst);
            }
        })
        .unwrap();

        assert_eq!(report.outcome, BatchOutcome::Cancelled);
        assert_eq!(report.created.len(), 3);
        assert!(!temp_dir.path().join("04").exists());
    }
}
