use super::error::BatchError;
use super::generator::{BatchOutcome, BatchReport, run_batch};
use super::request::BatchRequest;
use crate::config::FailurePolicy;
use crate::tools::create_progress_bar;
use console::style;
use rust_i18n::t;
use std::sync::atomic::AtomicBool;

/// 預覽最多列出的名稱數量（頭尾各半）
const PREVIEW_LIMIT: usize = 6;

pub fn print_preview(request: &BatchRequest) {
    println!();
    println!(
        "{}",
        style(t!(
            "factory.preview_summary",
            count = request.count(),
            dir = request.base_directory().display()
        ))
        .cyan()
    );
    println!(
        "  {} {}",
        style(t!("factory.output_example")).dim(),
        style(request.preview_name()).green()
    );
    println!();

    for name in preview_names(request) {
        match name {
            Some(name) => println!("  {} {}", style("→").dim(), name),
            None => println!("  {}", style("...").dim()),
        }
    }
    println!();
}

/// 名稱過多時只列出頭尾，`None` 代表省略
fn preview_names(request: &BatchRequest) -> Vec<Option<String>> {
    let count = request.count();
    if count <= PREVIEW_LIMIT {
        return request.folder_names().map(Some).collect();
    }

    let half = PREVIEW_LIMIT / 2;
    let head = (1..=half).map(|i| Some(request.folder_name(i)));
    let tail = (count - half + 1..=count).map(|i| Some(request.folder_name(i)));
    head.chain(std::iter::once(None)).chain(tail).collect()
}

pub fn print_dry_run(request: &BatchRequest) {
    println!(
        "{}",
        style(t!("factory.dry_run_header", count = request.count())).cyan()
    );
    for path in (1..=request.count()).map(|i| request.folder_path(i)) {
        println!("  {}", path.display());
    }
}

/// 以進度條執行批次
pub fn run_with_progress_bar(
    request: &BatchRequest,
    policy: FailurePolicy,
    shutdown_signal: &AtomicBool,
) -> Result<BatchReport, BatchError> {
    let progress_bar = create_progress_bar(request.count(), t!("factory.creating"));

    let report = run_batch(request, policy, shutdown_signal, |progress| {
        progress_bar.set_position(progress.index as u64);
        progress_bar.set_message(t!("factory.progress", percent = progress.percent()).to_string());
    })?;

    match report.outcome {
        BatchOutcome::Completed => progress_bar.finish_with_message(t!("factory.done").to_string()),
        BatchOutcome::Halted => {
            progress_bar.abandon_with_message(t!("factory.halted").to_string());
        }
        BatchOutcome::Cancelled => {
            progress_bar.abandon_with_message(t!("factory.interrupted").to_string());
        }
    }

    Ok(report)
}

pub fn print_summary(report: &BatchReport) {
    println!();
    println!("{}", style(t!("factory.summary_title")).cyan().bold());
    println!(
        "  {}",
        t!("factory.summary_created", count = style(report.created.len()).green())
    );

    if !report.failures.is_empty() {
        println!(
            "  {}",
            t!("factory.summary_failed", count = style(report.failures.len()).red())
        );
        for failure in &report.failures {
            println!("    {} {}", style("✗").red(), failure);
        }
    }

    let not_attempted = report.not_attempted();
    if not_attempted > 0 {
        println!(
            "  {}",
            t!(
                "factory.summary_not_attempted",
                count = style(not_attempted).yellow()
            )
        );
    }

    match report.outcome {
        BatchOutcome::Completed => {}
        BatchOutcome::Halted => println!("{}", style(t!("factory.summary_halted")).yellow()),
        BatchOutcome::Cancelled => println!("{}", style(t!("factory.summary_cancelled")).yellow()),
    }
}
