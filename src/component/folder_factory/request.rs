use super::error::{BatchError, NameField};
use super::naming::{compose_folder_name, zero_pad_width};
use crate::tools::{check_writable_directory, find_reserved_char};
use std::path::{Path, PathBuf};

/// 一次批次建立的輸入
///
/// 建立時即完成驗證；實際執行前會再檢查一次基底資料夾。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    base_directory: PathBuf,
    prefix: String,
    suffix: String,
    count: usize,
}

impl BatchRequest {
    pub fn new(
        base_directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        count: usize,
    ) -> Result<Self, BatchError> {
        let request = Self {
            base_directory: base_directory.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
            count,
        };
        request.validate()?;
        Ok(request)
    }

    /// 依序檢查數量、名稱、基底資料夾
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.count == 0 {
            return Err(BatchError::InvalidCount {
                input: self.count.to_string(),
            });
        }
        validate_name_part(NameField::Prefix, &self.prefix)?;
        validate_name_part(NameField::Suffix, &self.suffix)?;
        check_writable_directory(&self.base_directory).map_err(|problem| {
            BatchError::InvalidBaseDirectory {
                path: self.base_directory.clone(),
                problem,
            }
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// 整批共用的補零寬度
    #[must_use]
    pub fn width(&self) -> usize {
        zero_pad_width(self.count)
    }

    #[must_use]
    pub fn folder_name(&self, index: usize) -> String {
        compose_folder_name(&self.prefix, index, self.width(), &self.suffix)
    }

    #[must_use]
    pub fn folder_path(&self, index: usize) -> PathBuf {
        self.base_directory.join(self.folder_name(index))
    }

    /// 依編號順序產生所有資料夾名稱，不觸碰檔案系統
    pub fn folder_names(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.width();
        (1..=self.count)
            .map(move |index| compose_folder_name(&self.prefix, index, width, &self.suffix))
    }

    /// 輸出範例：批次中最後一個資料夾的名稱
    #[must_use]
    pub fn preview_name(&self) -> String {
        self.folder_name(self.count)
    }
}

/// 解析使用者輸入的數量：只允許數字，且必須大於 0
pub fn parse_count(input: &str) -> Result<usize, BatchError> {
    let trimmed = input.trim();
    let invalid = || BatchError::InvalidCount {
        input: input.to_string(),
    };

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(count) => Ok(count),
    }
}

/// 前綴與後綴不可包含保留字元
pub fn validate_name_part(field: NameField, text: &str) -> Result<(), BatchError> {
    match find_reserved_char(text) {
        Some(character) => Err(BatchError::InvalidName { field, character }),
        None => Ok(()),
    }
}
