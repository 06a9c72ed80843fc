//! 批次建立編號資料夾元件
//!
//! 依前綴、後綴與數量，在指定資料夾下建立補零編號的子資料夾

mod display;
mod error;
mod form;
mod generator;
mod main;
mod naming;
mod request;

pub use display::{print_dry_run, print_preview, print_summary, run_with_progress_bar};
pub use error::{BatchError, NameField};
pub use form::BatchForm;
pub use generator::{
    BatchGenerator, BatchOutcome, BatchProgress, BatchReport, CreatedFolder, generate, run_batch,
};
pub use main::FolderFactory;
pub use naming::{compose_folder_name, pad_index, zero_pad_width};
pub use request::{BatchRequest, parse_count, validate_name_part};
