//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod files;
pub mod repository;

pub use config::Config;
pub use files::{FileStore, LocalFiles};
pub use repository::{FileSystemRepository, SettingsRepository};
