use super::error::BatchError;
use super::request::{BatchRequest, parse_count};
use std::path::PathBuf;

/// 使用者尚未送出的輸入欄位
///
/// 每次批次完成後表單會被清空，下一批從空白開始。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchForm {
    pub directory: Option<PathBuf>,
    pub prefix: String,
    pub suffix: String,
    pub count: String,
}

impl BatchForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 已選擇資料夾且數量為正整數時才可執行
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.directory
            .as_ref()
            .is_some_and(|dir| !dir.as_os_str().is_empty())
            && parse_count(&self.count).is_ok()
    }

    /// 輸出範例：前綴 + 輸入的數量 + 後綴
    #[must_use]
    pub fn output_example(&self) -> String {
        format!("{}{}{}", self.prefix, self.count.trim(), self.suffix)
    }

    pub fn to_request(&self) -> Result<BatchRequest, BatchError> {
        let count = parse_count(&self.count)?;
        let directory = self.directory.clone().unwrap_or_default();
        BatchRequest::new(directory, self.prefix.as_str(), self.suffix.as_str(), count)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
