pub mod headless_mode;
pub mod messages;
pub mod tui_mode;

pub use headless_mode::{analyze_resume, keys_set, keys_show, keys_test};
pub use tui_mode::run_tui_mode;
