mod name_validator;
mod path_validator;
mod progress;

pub use name_validator::{RESERVED_CHARS, find_reserved_char};
pub use path_validator::{DirectoryProblem, check_writable_directory, validate_directory_exists};
pub use progress::{create_progress_bar, progress_percent};
