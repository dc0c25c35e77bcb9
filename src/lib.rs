//! vdata-nav - outline, folding and schema navigation for KV3 VData files
//!
//! This crate provides the navigation engine behind a VData editor,
//! implementing the Elm Architecture pattern: host notifications become
//! messages, update functions return commands, and the runtime executes them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod fs_watcher;
pub mod host;
pub mod messages;
pub mod model;
pub mod outline;
pub mod runtime;
pub mod scheduler;
pub mod schema;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::EditorSession;
pub use runtime::Runtime;
