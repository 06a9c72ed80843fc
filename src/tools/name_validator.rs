use regex::Regex;
use std::sync::LazyLock;

/// 資料夾名稱中不允許的字元，供提示訊息顯示
pub const RESERVED_CHARS: &str = r#"\ / : * ? " < > |"#;

static REGEX_RESERVED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|\x00-\x1f]"#).expect("Invalid regex"));

/// 回傳字串中第一個保留字元
#[must_use]
pub fn find_reserved_char(text: &str) -> Option<char> {
    REGEX_RESERVED_CHARS
        .find(text)
        .and_then(|m| m.as_str().chars().next())
}
