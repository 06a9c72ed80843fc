//! 命令列參數
//!
//! 不帶子命令時啟動互動式選單

use crate::component::folder_factory::{
    BatchError, BatchRequest, parse_count, print_dry_run, print_summary, run_with_progress_bar,
};
use crate::config::{Config, FailurePolicy};
use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

#[derive(Parser, Debug)]
#[command(
    name = "folder_factory",
    about = "Create batches of sequentially numbered, zero-padded folders",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create numbered folders inside DIRECTORY
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Existing parent directory
    pub directory: PathBuf,

    /// Number of folders to create
    #[arg(short, long)]
    pub count: String,

    /// Text placed before the number
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub prefix: String,

    /// Text placed after the number
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub suffix: String,

    /// Keep going when a folder cannot be created
    #[arg(long)]
    pub continue_on_error: bool,

    /// Only list the folders that would be created
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateArgs {
    pub fn to_request(&self) -> Result<BatchRequest, BatchError> {
        let count = parse_count(&self.count)?;
        BatchRequest::new(
            &self.directory,
            self.prefix.as_str(),
            self.suffix.as_str(),
            count,
        )
    }

    /// 命令列旗標優先於設定檔
    #[must_use]
    pub const fn failure_policy(&self, configured: FailurePolicy) -> FailurePolicy {
        if self.continue_on_error {
            FailurePolicy::Continue
        } else {
            configured
        }
    }
}

pub fn run_create(args: &CreateArgs, config: &Config, shutdown_signal: &AtomicBool) -> Result<()> {
    let request = args.to_request()?;

    if args.dry_run {
        print_dry_run(&request);
        return Ok(());
    }

    let policy = args.failure_policy(config.settings.failure_policy);
    let report = run_with_progress_bar(&request, policy, shutdown_signal)?;
    print_summary(&report);

    if !report.is_success() {
        bail!(
            "{} of {} folders created",
            report.created.len(),
            report.total
        );
    }
    Ok(())
}
