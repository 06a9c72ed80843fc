use crate::component::FolderFactory;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_folder_factory(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut factory = FolderFactory::new(config.clone(), Arc::clone(shutdown_signal));

    if let Err(e) = factory.run() {
        eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
    }

    // 元件可能更新了路徑歷史
    *config = Config::new()?;

    pause(term)?;
    Ok(())
}
