use crate::tools::DirectoryProblem;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 名稱欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Prefix,
    Suffix,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Suffix => write!(f, "suffix"),
        }
    }
}

/// 批次建立資料夾的錯誤
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid folder count `{input}`: expected a positive integer")]
    InvalidCount { input: String },

    #[error("base directory {} {problem}", .path.display())]
    InvalidBaseDirectory {
        path: PathBuf,
        problem: DirectoryProblem,
    },

    #[error("{field} contains reserved character {character:?}")]
    InvalidName { field: NameField, character: char },

    #[error("failed to create folder #{index} at {}: {cause}", .path.display())]
    Creation {
        index: usize,
        path: PathBuf,
        cause: io::Error,
    },
}

impl BatchError {
    /// 失敗項目的編號（僅建立錯誤）
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Creation { index, .. } => Some(*index),
            _ => None,
        }
    }
}
