use anyhow::{Context, Result};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 註冊 Ctrl-C 處理器，回傳供各元件在每個步驟之間檢查的中斷旗標
pub fn setup_shutdown_signal() -> Result<Arc<AtomicBool>> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\n{}", t!("common.interrupt_received"));
    })
    .context("Failed to install Ctrl-C handler")?;

    Ok(shutdown_signal)
}

/// 清除先前留下的中斷旗標，回傳旗標原本是否已設定
///
/// 互動模式下使用者確認開始新批次時呼叫，讓在提示階段按下的 Ctrl-C 不會取消之後的批次。
pub fn clear_shutdown_signal(shutdown_signal: &AtomicBool) -> bool {
    shutdown_signal.swap(false, Ordering::SeqCst)
}
