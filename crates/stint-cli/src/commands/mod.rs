//! CLI subcommand implementations.

pub mod delete;
pub mod edit;
pub mod export;
pub mod log;
pub mod resume;
pub mod start;
pub mod status;
pub mod stop;
pub mod suggest;
pub mod table;
pub mod theme;
pub mod watch;
