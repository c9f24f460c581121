// Module declarations
mod app;
pub mod dashboard;
mod interview;
mod resume;
mod settings;
pub mod splash;
// Re-exports for external use
pub use app::{App, UIConfig, run};
