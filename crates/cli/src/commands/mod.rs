mod config;
mod detect;
mod format;
mod init;
mod reindent;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use detect::DetectArgs;
pub use detect::handle_detect;
pub use detect::render_detect;
pub use format::FormatArgs;
pub use format::handle_format;
pub use format::indent_lines;
pub use format::render_format;
pub use init::AlreadyInitialized;
pub use init::InitArgs;
pub use init::handle_init;
pub use init::init_config;
pub use reindent::ReindentArgs;
pub use reindent::handle_reindent;
pub use reindent::render_reindent;
