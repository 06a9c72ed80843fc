use super::display::{print_preview, print_summary, run_with_progress_bar};
use super::error::NameField;
use super::form::BatchForm;
use super::request::validate_name_part;
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::signal::clear_shutdown_signal;
use crate::tools::{RESERVED_CHARS, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::{debug, info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 批次建立編號資料夾元件
pub struct FolderFactory {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
    form: BatchForm,
}

impl FolderFactory {
    pub fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
            form: BatchForm::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style(t!("factory.title")).cyan().bold());

        let Some(input_path) = self.prompt_input_path()? else {
            return Ok(()); // ESC pressed
        };
        let directory = PathBuf::from(&input_path);

        validate_directory_exists(&directory)?;

        // 更新路徑歷史並儲存
        {
            let mut settings = self.config.settings.clone();
            add_recent_path(&mut settings, &input_path);
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存路徑歷史: {e}");
            }
        }

        self.form.directory = Some(directory);
        self.form.prefix = self.prompt_name_part(NameField::Prefix)?;
        self.form.count = self.prompt_count()?;
        self.form.suffix = self.prompt_name_part(NameField::Suffix)?;

        let request = self.form.to_request()?;

        print_preview(&request);

        if !self.confirm_create()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        if clear_shutdown_signal(&self.shutdown_signal) {
            debug!("清除確認前收到的中斷訊號");
        }

        let policy = self.config.settings.failure_policy;
        let report = run_with_progress_bar(&request, policy, &self.shutdown_signal)?;
        print_summary(&report);
        self.form.reset();

        info!(
            "資料夾建立完成 - 建立: {}, 失敗: {}",
            report.created.len(),
            report.failures.len()
        );

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<Option<String>> {
        let recent_paths = &self.config.settings.recent_paths;

        if recent_paths.is_empty() {
            return self.prompt_new_path().map(Some);
        }

        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let exists = Path::new(p).is_dir();
                let indicator = if exists { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push(t!("factory.new_path").to_string());

        println!("{}", style(t!("common.esc_hint")).dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("factory.select_path"))
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
            Some(_) => self.prompt_new_path().map(Some),
        }
    }

    fn prompt_new_path(&self) -> Result<String> {
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("factory.prompt_path"))
            .interact_text()?;
        Ok(path.trim().to_string())
    }

    fn prompt_name_part(&self, field: NameField) -> Result<String> {
        let prompt = match field {
            NameField::Prefix => t!("factory.prompt_prefix"),
            NameField::Suffix => t!("factory.prompt_suffix"),
        };

        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                validate_name_part(field, input)
                    .map_err(|_| t!("factory.reserved_chars", chars = RESERVED_CHARS).to_string())
            })
            .interact_text()?;
        Ok(text)
    }

    fn prompt_count(&self) -> Result<String> {
        // 資料夾已選定，數量有效時表單即可執行
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("factory.prompt_count"))
            .validate_with(|input: &String| -> Result<(), String> {
                let candidate = BatchForm {
                    count: input.clone(),
                    ..self.form.clone()
                };
                if candidate.is_ready() {
                    Ok(())
                } else {
                    Err(t!("factory.invalid_count").to_string())
                }
            })
            .interact_text()?;
        Ok(text.trim().to_string())
    }

    fn confirm_create(&self) -> Result<bool> {
        let confirm = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("factory.confirm"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }
}
