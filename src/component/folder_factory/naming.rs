//! 資料夾命名規則
//!
//! 編號補零寬度由整批數量決定，整批名稱寬度一致

/// 補零寬度：數量的十進位位數
#[must_use]
pub fn zero_pad_width(count: usize) -> usize {
    count.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

/// 將編號左側補 0 至指定寬度
#[must_use]
pub fn pad_index(index: usize, width: usize) -> String {
    format!("{index:0width$}")
}

#[must_use]
pub fn compose_folder_name(prefix: &str, index: usize, width: usize, suffix: &str) -> String {
    format!("{prefix}{}{suffix}", pad_index(index, width))
}
