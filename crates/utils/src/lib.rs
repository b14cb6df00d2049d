mod detect_indent;
mod get_indent_tracker_config;
mod reindent;

pub use detect_indent::{detect_indent, leading_width};
pub use get_indent_tracker_config::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, find_config_path, get_indent_tracker_config,
    get_indent_tracker_dir,
};
pub use reindent::reindent;
