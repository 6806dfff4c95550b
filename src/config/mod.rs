pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, LoggingConfig, PracticumConfig};
pub use loader::load_config;
