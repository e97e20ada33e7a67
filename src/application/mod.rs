//! Application layer - Use cases and orchestration

pub mod edit_tags;
pub mod init;
pub mod list_tags;
pub mod manage_config;
pub mod quick_move;

pub use edit_tags::{EditOutcome, EditTagsService};
pub use list_tags::{ListTagsService, TagUsage};
pub use manage_config::ConfigService;
pub use quick_move::QuickMoveService;
