pub mod environment;
pub mod json;
pub mod paths;

pub use environment::{get_export_dir, get_output_dir};
pub use json::{is_truthy, value_to_text};
pub use paths::{display_file_name, output_path_for, validate_file_size};
